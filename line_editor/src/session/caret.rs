// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ColIndex, Marker, RowIndex};

/// Where typing happens, in logical coordinates. The row can be equal to the line count
/// (the virtual row just past the end of the document), in which case the column is 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Caret {
    pub row: RowIndex,
    pub col: ColIndex,
}

impl Caret {
    pub fn new(row: impl Into<RowIndex>, col: impl Into<ColIndex>) -> Self {
        Self {
            row: row.into(),
            col: col.into(),
        }
    }

    #[must_use]
    pub fn as_marker(&self) -> Marker { Marker::new(self.row, self.col) }
}

impl From<Marker> for Caret {
    fn from(marker: Marker) -> Self { Caret::new(marker.row, marker.col) }
}
