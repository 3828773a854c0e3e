// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Keeps markers (and region end points) pointing at the same text while the document
//! changes underneath them. Each `adjust_on_*` method describes one logical change to
//! the document, and must be called together with the matching [`crate::Document`]
//! mutation. [`crate::EditorSession`] does this pairing for every edit.
//!
//! The rule used throughout: *a marker sticks to the byte it sits on*.
//!
//! ```text
//! insert 'X' at col 2     split at col 2          delete byte at col 1
//!
//!   a b c d                 a b c d                 a b c d
//!       ▲ (col 2)               ▲ (col 2)                 ▲ (col 3)
//!   a b X c d               a b                     a c d
//!         ▲ (col 3)         c d                         ▲ (col 2)
//!                           ▲ (row+1, col 0)
//! ```
//!
//! No adjustment ever removes a marker.

use crate::{ColIndex, LineEditorError, Marker, Region, RowIndex};

/// Default capacity for both the marker and the region collections.
pub const DEFAULT_MARKER_CAPACITY: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerTracker {
    markers: Vec<Marker>,
    regions: Vec<Region>,
    marker_capacity: usize,
    region_capacity: usize,
}

impl Default for MarkerTracker {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER_CAPACITY, DEFAULT_MARKER_CAPACITY)
    }
}

impl MarkerTracker {
    #[must_use]
    pub fn new(marker_capacity: usize, region_capacity: usize) -> Self {
        Self {
            markers: Vec::new(),
            regions: Vec::new(),
            marker_capacity,
            region_capacity,
        }
    }

    #[must_use]
    pub fn markers(&self) -> &[Marker] { &self.markers }

    #[must_use]
    pub fn regions(&self) -> &[Region] { &self.regions }

    #[must_use]
    pub fn len(&self) -> usize { self.markers.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.markers.is_empty() }

    #[must_use]
    pub fn marker_capacity(&self) -> usize { self.marker_capacity }

    /// Add a marker. Duplicates are allowed.
    ///
    /// # Errors
    ///
    /// Returns [`LineEditorError::MarkerCapacityReached`] if the collection is full. The
    /// marker is not added in that case.
    pub fn try_add_marker(&mut self, marker: Marker) -> Result<(), LineEditorError> {
        if self.markers.len() >= self.marker_capacity {
            return Err(LineEditorError::MarkerCapacityReached {
                capacity: self.marker_capacity,
            });
        }
        self.markers.push(marker);
        Ok(())
    }

    /// Add a region.
    ///
    /// # Errors
    ///
    /// Returns [`LineEditorError::RegionCapacityReached`] if the collection is full.
    pub fn try_add_region(&mut self, region: Region) -> Result<(), LineEditorError> {
        if self.regions.len() >= self.region_capacity {
            return Err(LineEditorError::RegionCapacityReached {
                capacity: self.region_capacity,
            });
        }
        self.regions.push(region);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.markers.clear();
        self.regions.clear();
    }

    /// Every tracked position: markers, and both end points of every region.
    fn positions_mut(&mut self) -> impl Iterator<Item = &mut Marker> {
        self.markers.iter_mut().chain(
            self.regions
                .iter_mut()
                .flat_map(|region| [&mut region.start, &mut region.end]),
        )
    }

    /// A byte was inserted at `(row, col)`. Markers on `row` at or after `col` move one
    /// column to the right.
    pub fn adjust_on_insert_char(&mut self, row: RowIndex, col: ColIndex) {
        for it in self.positions_mut() {
            if it.row == row && it.col >= col {
                it.col += 1;
            }
        }
    }

    /// The byte at `(row, col)` was deleted. Markers on `row` after `col` move one column
    /// to the left. A marker on the deleted byte stays put, and so ends up on the byte
    /// that slid into its place.
    pub fn adjust_on_delete_char(&mut self, row: RowIndex, col: ColIndex) {
        for it in self.positions_mut() {
            if it.row == row && it.col > col {
                it.col -= 1;
            }
        }
    }

    /// Line `row` was split at `col`, and the tail became line `row + 1`.
    pub fn adjust_on_split_line(&mut self, row: RowIndex, col: ColIndex) {
        for it in self.positions_mut() {
            if it.row == row && it.col >= col {
                it.row += 1;
                it.col -= col.as_usize();
            } else if it.row > row {
                it.row += 1;
            }
        }
    }

    /// Line `row` was appended onto line `row - 1`, whose length before the join was
    /// `prev_line_len`. Joining the first row is not a thing, so `row` 0 is ignored.
    pub fn adjust_on_join_line(&mut self, row: RowIndex, prev_line_len: usize) {
        if row.is_first() {
            return;
        }
        for it in self.positions_mut() {
            if it.row == row {
                it.row -= 1;
                it.col += prev_line_len;
            } else if it.row > row {
                it.row -= 1;
            }
        }
    }

    /// A whole line was inserted at `at`. Markers on that row and below move down.
    pub fn adjust_on_insert_line(&mut self, at: RowIndex) {
        for it in self.positions_mut() {
            if it.row >= at {
                it.row += 1;
            }
        }
    }

    /// Line `at` was deleted, leaving `line_count_after` lines in the document, and
    /// `len_of_new_last_line` is the length of the last one of those. Markers below move
    /// up. Markers that were on the deleted line move to the start of the line that took
    /// its place, or, if the deleted line was the last line, to the end of the new last
    /// line. An emptied document leaves them at `(0, 0)`.
    pub fn adjust_on_delete_line(
        &mut self,
        at: RowIndex,
        line_count_after: usize,
        len_of_new_last_line: usize,
    ) {
        for it in self.positions_mut() {
            if it.row == at {
                if at.as_usize() < line_count_after {
                    it.col = ColIndex(0);
                } else if let Some(prev) = at.prev()
                    && line_count_after > 0
                {
                    it.row = prev;
                    it.col = ColIndex(len_of_new_last_line);
                } else {
                    *it = Marker::default();
                }
            } else if it.row > at {
                it.row -= 1;
            }
        }
    }

    /// The nearest marker strictly after `from` in document order. When there isn't one,
    /// wrap around to the first marker in the document.
    #[must_use]
    pub fn next_marker_after(&self, from: Marker) -> Option<Marker> {
        let after = self.markers.iter().filter(|it| **it > from).min();
        after.or_else(|| self.markers.iter().min()).copied()
    }

    /// Replace all markers. Markers beyond the capacity are dropped.
    pub fn replace_markers(&mut self, markers: impl IntoIterator<Item = Marker>) {
        self.markers.clear();
        self.markers
            .extend(markers.into_iter().take(self.marker_capacity));
    }

    /// Clamp every position into a document of `line_count` lines, where `line_len`
    /// reports the length of a row.
    pub fn clamp_into(&mut self, line_count: usize, line_len: impl Fn(RowIndex) -> usize) {
        for it in self.positions_mut() {
            if line_count == 0 {
                *it = Marker::default();
                continue;
            }
            if it.row.as_usize() >= line_count {
                it.row = RowIndex(line_count - 1);
            }
            it.col = it.col.clamp_to(line_len(it.row));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, col, row};

    fn tracker_with(markers: &[(usize, usize)]) -> MarkerTracker {
        let mut it = MarkerTracker::default();
        for &(r, c) in markers {
            it.try_add_marker(Marker::new(r, c)).unwrap();
        }
        it
    }

    fn positions(it: &MarkerTracker) -> Vec<(usize, usize)> {
        it.markers()
            .iter()
            .map(|m| (m.row.as_usize(), m.col.as_usize()))
            .collect()
    }

    #[test]
    fn test_capacity_is_enforced() {
        let mut it = MarkerTracker::new(2, 1);
        assert!(it.try_add_marker(Marker::new(0, 0)).is_ok());
        assert!(it.try_add_marker(Marker::new(0, 0)).is_ok());
        let result = it.try_add_marker(Marker::new(1, 1));
        assert!(matches!(
            result,
            Err(LineEditorError::MarkerCapacityReached { capacity: 2 })
        ));
        assert_eq2!(it.len(), 2);

        let region = Region::new(Marker::new(0, 0), Marker::new(0, 1));
        assert!(it.try_add_region(region).is_ok());
        assert!(it.try_add_region(region).is_err());
    }

    #[test]
    fn test_insert_char_shifts_markers_at_or_after() {
        let mut it = tracker_with(&[(0, 3), (0, 1), (0, 0), (1, 3)]);
        it.adjust_on_insert_char(row(0), col(1));
        assert_eq2!(positions(&it), vec![(0, 4), (0, 2), (0, 0), (1, 3)]);
    }

    #[test]
    fn test_delete_char_shifts_markers_after() {
        let mut it = tracker_with(&[(0, 3), (0, 1), (0, 0), (1, 3)]);
        it.adjust_on_delete_char(row(0), col(1));
        assert_eq2!(positions(&it), vec![(0, 2), (0, 1), (0, 0), (1, 3)]);
    }

    #[test]
    fn test_insert_then_delete_restores_markers() {
        let mut it = tracker_with(&[(0, 3), (0, 2), (0, 5)]);
        it.adjust_on_insert_char(row(0), col(3));
        it.adjust_on_delete_char(row(0), col(3));
        assert_eq2!(positions(&it), vec![(0, 3), (0, 2), (0, 5)]);
    }

    #[test]
    fn test_split_line() {
        // R ┌──────┐        R ┌──────┐
        // 0 │abcdef│  ───▶  0 │abc   │
        // 1 │xy    │        1 │def   │
        //   └──────┘        2 │xy    │
        //   C012345           └──────┘
        let mut it = tracker_with(&[(0, 4), (0, 3), (0, 2), (1, 1)]);
        it.adjust_on_split_line(row(0), col(3));
        assert_eq2!(positions(&it), vec![(1, 1), (1, 0), (0, 2), (2, 1)]);
    }

    #[test]
    fn test_join_line() {
        let mut it = tracker_with(&[(1, 0), (1, 2), (2, 5), (0, 1)]);
        it.adjust_on_join_line(row(1), 2);
        assert_eq2!(positions(&it), vec![(0, 2), (0, 4), (1, 5), (0, 1)]);
    }

    #[test]
    fn test_join_first_row_is_ignored() {
        let mut it = tracker_with(&[(0, 1)]);
        it.adjust_on_join_line(row(0), 10);
        assert_eq2!(positions(&it), vec![(0, 1)]);
    }

    #[test]
    fn test_insert_and_delete_line() {
        let mut it = tracker_with(&[(0, 1), (1, 1), (2, 1)]);
        it.adjust_on_insert_line(row(1));
        assert_eq2!(positions(&it), vec![(0, 1), (2, 1), (3, 1)]);

        // Delete row 2 of 4, leaving 3 lines: the marker there moves to the start of
        // the line that took its place.
        it.adjust_on_delete_line(row(2), 3, 0);
        assert_eq2!(positions(&it), vec![(0, 1), (2, 0), (2, 1)]);
    }

    #[test]
    fn test_delete_last_line_moves_markers_to_end_of_new_last_line() {
        let mut it = tracker_with(&[(1, 3), (0, 0)]);
        it.adjust_on_delete_line(row(1), 1, 7);
        assert_eq2!(positions(&it), vec![(0, 7), (0, 0)]);

        it.adjust_on_delete_line(row(0), 0, 0);
        assert_eq2!(positions(&it), vec![(0, 0), (0, 0)]);
    }

    #[test]
    fn test_regions_follow_the_same_rules() {
        let mut it = MarkerTracker::default();
        it.try_add_region(Region::new(Marker::new(0, 1), Marker::new(0, 4)))
            .unwrap();
        it.adjust_on_split_line(row(0), col(2));
        assert_eq2!(
            it.regions()[0],
            Region::new(Marker::new(0, 1), Marker::new(1, 2))
        );
    }

    #[test]
    fn test_unbounded_capacity_does_not_allocate_up_front() {
        let mut it = MarkerTracker::new(usize::MAX, usize::MAX);
        assert_eq2!(it.marker_capacity(), usize::MAX);
        assert!(it.try_add_marker(Marker::new(0, 0)).is_ok());
    }

    #[test]
    fn test_regions_under_join_and_whole_line_changes() {
        // R ┌─────┐
        // 0 │ab   │  start (0, 1)
        // 1 │cdef │  end   (1, 3)
        // 2 │gh   │
        //   └─────┘
        let mut it = MarkerTracker::default();
        it.try_add_region(Region::new(Marker::new(0, 1), Marker::new(1, 3)))
            .unwrap();

        it.adjust_on_join_line(row(1), 2);
        assert_eq2!(
            it.regions()[0],
            Region::new(Marker::new(0, 1), Marker::new(0, 5))
        );

        it.adjust_on_insert_line(row(0));
        assert_eq2!(
            it.regions()[0],
            Region::new(Marker::new(1, 1), Marker::new(1, 5))
        );

        // Delete the last of 2 lines: both ends go to the end of the new last line.
        it.adjust_on_delete_line(row(1), 1, 4);
        assert_eq2!(
            it.regions()[0],
            Region::new(Marker::new(0, 4), Marker::new(0, 4))
        );
    }

    #[test]
    fn test_next_marker_after_wraps() {
        let it = tracker_with(&[(3, 0), (1, 5), (1, 2)]);
        assert_eq2!(it.next_marker_after(Marker::new(0, 0)), Some(Marker::new(1, 2)));
        assert_eq2!(it.next_marker_after(Marker::new(1, 2)), Some(Marker::new(1, 5)));
        assert_eq2!(it.next_marker_after(Marker::new(3, 0)), Some(Marker::new(1, 2)));
        assert_eq2!(MarkerTracker::default().next_marker_after(Marker::default()), None);
    }

    #[test]
    fn test_clamp_into() {
        let mut it = tracker_with(&[(9, 9), (0, 9), (0, 1)]);
        it.clamp_into(2, |r| if r.is_first() { 3 } else { 5 });
        assert_eq2!(positions(&it), vec![(1, 5), (0, 3), (0, 1)]);
    }
}
