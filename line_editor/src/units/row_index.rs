// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::create_index_arithmetic_operators;

/// The vertical index of a line in the [`Document`], starting at 0. Once the caret is
/// allowed past the last line, the row equal to the line count is the "virtual" row
/// where typing appends a new line.
///
/// You can use [`row()`] to create a new instance.
///
/// # Examples
///
/// ```
/// use r3bl_line_editor::{RowIndex, row};
/// let it = row(5);
/// assert_eq!(it, RowIndex::new(5));
/// assert_eq!(it - 10, row(0));
/// ```
///
/// [`Document`]: crate::Document
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct RowIndex(pub usize);

/// Creates a new [`RowIndex`] from any type that can be converted into it.
pub fn row(arg_row_index: impl Into<RowIndex>) -> RowIndex { arg_row_index.into() }

impl RowIndex {
    pub fn new(arg_row_index: impl Into<RowIndex>) -> Self { arg_row_index.into() }

    #[must_use]
    pub fn as_usize(&self) -> usize { self.0 }

    #[must_use]
    pub fn is_first(&self) -> bool { self.0 == 0 }

    /// The row directly above, or [`None`] for the first row.
    #[must_use]
    pub fn prev(&self) -> Option<RowIndex> { self.0.checked_sub(1).map(RowIndex) }

    #[must_use]
    pub fn next(&self) -> RowIndex { RowIndex(self.0 + 1) }
}

create_index_arithmetic_operators!(RowIndex);

impl From<i32> for RowIndex {
    /// Negative values clamp to the first row.
    fn from(val: i32) -> Self { RowIndex(usize::try_from(val).unwrap_or(0)) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_prev_and_next() {
        assert_eq2!(row(0).prev(), None);
        assert_eq2!(row(3).prev(), Some(row(2)));
        assert_eq2!(row(3).next(), row(4));
    }

    #[test]
    fn test_sub_saturates() {
        let mut it = row(1);
        it -= 5;
        assert_eq2!(it, row(0));
        assert_eq2!(row(-4), row(0));
    }

    #[test]
    fn test_debug_and_display() {
        assert_eq2!(format!("{:?}", row(7)), "RowIndex(7)");
        assert_eq2!(format!("{}", row(7)), "7");
    }
}
