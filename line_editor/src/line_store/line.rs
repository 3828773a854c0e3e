// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallvec::SmallVec;

use crate::{ClassifiedLine, HighlightCategory, HighlightContext, RenderColIndex,
            RowIndex, apply_marker_overlay, classify_line, logical_to_rendered,
            render_line};

/// One logical line of the [`crate::Document`], plus everything derived from it.
///
/// - `raw` is the only source of truth. It holds exactly the bytes between two newlines.
/// - `rendered` is `raw` with tabs expanded, and is recomputed whenever `raw` changes.
/// - `tags` has one [`HighlightCategory`] per byte in `rendered`.
///
/// Only the [`crate::Document`] can mutate a line, so the derived fields never go stale.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    index: RowIndex,
    raw: Vec<u8>,
    rendered: Vec<u8>,
    tags: Vec<HighlightCategory>,
    comment_state_at_end: bool,
    /// Block comment state this line was last classified with. [`None`] until the first
    /// classification, so a freshly inserted line is always classified.
    comment_state_at_start: Option<bool>,
    /// Stamp of the last classification. Unique within the owning document.
    generation: u64,
}

impl Line {
    pub(crate) fn new(index: RowIndex, raw: Vec<u8>, tab_stop: usize) -> Self {
        let rendered = render_line(&raw, tab_stop);
        let tags = vec![HighlightCategory::Normal; rendered.len()];
        Self {
            index,
            raw,
            rendered,
            tags,
            comment_state_at_end: false,
            comment_state_at_start: None,
            generation: 0,
        }
    }

    #[must_use]
    pub fn index(&self) -> RowIndex { self.index }

    #[must_use]
    pub fn raw(&self) -> &[u8] { &self.raw }

    #[must_use]
    pub fn rendered(&self) -> &[u8] { &self.rendered }

    #[must_use]
    pub fn tags(&self) -> &[HighlightCategory] { &self.tags }

    /// Is a block comment still open at the end of this line?
    #[must_use]
    pub fn comment_state_at_end(&self) -> bool { self.comment_state_at_end }

    /// Length of the raw content, ie, the largest valid logical column.
    #[must_use]
    pub fn len(&self) -> usize { self.raw.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.raw.is_empty() }

    #[must_use]
    pub fn render_len(&self) -> usize { self.rendered.len() }

    /// Changes every time the tags are recomputed by [`Line::classify()`]. Overlays
    /// painted directly onto the tags leave it alone.
    #[must_use]
    pub fn generation(&self) -> u64 { self.generation }

    pub(crate) fn tags_mut(&mut self) -> &mut [HighlightCategory] { &mut self.tags }

    pub(crate) fn set_index(&mut self, index: RowIndex) { self.index = index; }

    pub(crate) fn comment_state_at_start(&self) -> Option<bool> {
        self.comment_state_at_start
    }

    /// Edit the raw bytes, then re-render. Tags are refreshed by the next
    /// [`Line::classify()`].
    pub(crate) fn edit_raw(&mut self, tab_stop: usize, edit: impl FnOnce(&mut Vec<u8>)) {
        edit(&mut self.raw);
        self.rendered = render_line(&self.raw, tab_stop);
    }

    /// Re-run the base classification pass seeded with `starts_in_block_comment`, then
    /// lay the marker overlay on top for every marker on this row. The result is
    /// stamped with `generation`.
    pub(crate) fn classify(
        &mut self,
        starts_in_block_comment: bool,
        ctx: HighlightContext<'_>,
        tab_stop: usize,
        generation: u64,
    ) {
        let ClassifiedLine {
            mut tags,
            ends_in_block_comment,
        } = classify_line(&self.rendered, ctx.profile, starts_in_block_comment);

        let marker_cols: SmallVec<[RenderColIndex; 4]> = ctx
            .markers
            .iter()
            .filter(|marker| marker.row == self.index)
            .map(|marker| logical_to_rendered(&self.raw, marker.col, tab_stop))
            .collect();
        apply_marker_overlay(&mut tags, marker_cols);

        self.tags = tags;
        self.comment_state_at_start = Some(starts_in_block_comment);
        self.comment_state_at_end = ends_in_block_comment;
        self.generation = generation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{C_PROFILE, Marker, assert_eq2, row, tags_to_string};

    #[test]
    fn test_new_line_renders_tabs() {
        let it = Line::new(row(0), b"\tx".to_vec(), 4);
        assert_eq2!(it.rendered(), b"    x");
        assert_eq2!(it.len(), 2);
        assert_eq2!(it.render_len(), 5);
        assert_eq2!(it.tags().len(), 5);
    }

    #[test]
    fn test_classify_applies_marker_overlay_in_rendered_columns() {
        // Marker at logical col 1 ('i'), which renders at col 4 after the tab.
        let markers = [Marker::new(0, 1), Marker::new(1, 0), Marker::new(0, 9)];
        let mut it = Line::new(row(0), b"\tif".to_vec(), 4);
        it.classify(false, HighlightContext::new(Some(&C_PROFILE), &markers), 4, 1);
        assert_eq2!(tags_to_string(it.tags()), "....@k");
    }

    #[test]
    fn test_classify_records_comment_state() {
        let mut it = Line::new(row(3), b"x /* y".to_vec(), 8);
        assert_eq2!(it.comment_state_at_start(), None);
        it.classify(false, HighlightContext::new(Some(&C_PROFILE), &[]), 8, 7);
        assert!(it.comment_state_at_end());
        assert_eq2!(it.comment_state_at_start(), Some(false));
        assert_eq2!(it.generation(), 7);
    }
}
