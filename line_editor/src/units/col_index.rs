// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::create_index_arithmetic_operators;

/// Logical column: a byte index into a line's raw content. Markers and the caret are
/// always expressed in logical columns. Valid values are `0..=line_len`, where
/// `line_len` is the position just past the last byte.
///
/// ```
/// use r3bl_line_editor::{ColIndex, col};
/// assert_eq!(col(3) + 1, ColIndex::new(4));
/// ```
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct ColIndex(pub usize);

/// Rendered column: an index into a line's tab expanded display content. Use
/// [`crate::logical_to_rendered`] and [`crate::rendered_to_logical`] to move between
/// the two column spaces.
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct RenderColIndex(pub usize);

/// Creates a new [`ColIndex`] from any type that can be converted into it.
pub fn col(arg_col_index: impl Into<ColIndex>) -> ColIndex { arg_col_index.into() }

/// Creates a new [`RenderColIndex`] from any type that can be converted into it.
pub fn render_col(arg_col_index: impl Into<RenderColIndex>) -> RenderColIndex {
    arg_col_index.into()
}

impl ColIndex {
    pub fn new(arg_col_index: impl Into<ColIndex>) -> Self { arg_col_index.into() }

    #[must_use]
    pub fn as_usize(&self) -> usize { self.0 }

    #[must_use]
    pub fn is_start(&self) -> bool { self.0 == 0 }

    /// Clamp this column so it never points past `len`.
    #[must_use]
    pub fn clamp_to(self, len: usize) -> ColIndex { ColIndex(self.0.min(len)) }
}

impl RenderColIndex {
    pub fn new(arg_col_index: impl Into<RenderColIndex>) -> Self { arg_col_index.into() }

    #[must_use]
    pub fn as_usize(&self) -> usize { self.0 }
}

create_index_arithmetic_operators!(ColIndex);
create_index_arithmetic_operators!(RenderColIndex);

impl From<i32> for ColIndex {
    /// Negative values clamp to the start of the line.
    fn from(val: i32) -> Self { ColIndex(usize::try_from(val).unwrap_or(0)) }
}

impl From<i32> for RenderColIndex {
    fn from(val: i32) -> Self { RenderColIndex(usize::try_from(val).unwrap_or(0)) }
}
