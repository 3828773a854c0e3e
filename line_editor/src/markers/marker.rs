// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ColIndex, RowIndex};

/// A tracked document position (aka bookmark). The column is *logical*, ie an index
/// into the raw bytes of the line, not into its rendered form.
///
/// Markers don't own anything in the document. They are kept valid by the
/// [`crate::MarkerTracker`] which adjusts them on every edit. Ordering is document
/// order: by row, then by column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Marker {
    pub row: RowIndex,
    pub col: ColIndex,
}

impl Marker {
    pub fn new(row: impl Into<RowIndex>, col: impl Into<ColIndex>) -> Self {
        Self {
            row: row.into(),
            col: col.into(),
        }
    }
}

/// A span between two markers. Regions are stored and kept up to date under edits, just
/// like markers, but nothing else in the buffer interprets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Region {
    pub start: Marker,
    pub end: Marker,
}

impl Region {
    #[must_use]
    pub fn new(start: Marker, end: Marker) -> Self { Self { start, end } }
}
