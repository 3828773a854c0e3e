// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Query overlay. [`find_next()`] looks for the next line whose rendered content
//! contains a query, wrapping around the document. [`HighlightSnapshot`] paints the
//! match as [`HighlightCategory::SearchMatch`] and remembers the tags it overwrote, so
//! the caller can put them back before drawing the next match.

use strum_macros::{Display, EnumString};

use crate::{ColIndex, Document, HighlightCategory, RenderColIndex, RowIndex,
            apply_search_overlay};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum SearchDirection {
    #[default]
    Forward,
    Backward,
}

/// Where a query was found. `render_col` is where the match starts in the rendered
/// content, `col` is the logical column a caret should move to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchMatch {
    pub row: RowIndex,
    pub render_col: RenderColIndex,
    pub col: ColIndex,
    pub len: usize,
}

/// Scan every line at most once, starting right after `maybe_last_match` in
/// `direction`, and wrapping at either end of the document. Without a previous match
/// the scan always starts at the top and goes forward. An empty query matches nothing.
#[must_use]
pub fn find_next(
    document: &Document,
    query: &[u8],
    maybe_last_match: Option<RowIndex>,
    direction: SearchDirection,
) -> Option<SearchMatch> {
    let line_count = document.line_count();
    if query.is_empty() || line_count == 0 {
        return None;
    }

    let direction = if maybe_last_match.is_some() {
        direction
    } else {
        SearchDirection::Forward
    };

    // Position of the row scanned before the first one, on a ring of `line_count` rows.
    let mut current = match maybe_last_match {
        Some(last) => last.as_usize() % line_count,
        None => line_count - 1,
    };

    for _ in 0..line_count {
        current = match direction {
            SearchDirection::Forward => (current + 1) % line_count,
            SearchDirection::Backward => (current + line_count - 1) % line_count,
        };
        let row = RowIndex(current);
        let Some(line) = document.line(row) else {
            continue;
        };
        if let Some(pos) = line
            .rendered()
            .windows(query.len())
            .position(|window| window == query)
        {
            let render_col = RenderColIndex(pos);
            return Some(SearchMatch {
                row,
                render_col,
                col: document.rendered_to_logical(row, render_col),
                len: query.len(),
            });
        }
    }

    None
}

/// The tags of one line as they were right before a search match was painted on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSnapshot {
    row: RowIndex,
    /// [`crate::Line::generation()`] of the line when its tags were saved.
    generation: u64,
    saved_tags: Vec<HighlightCategory>,
}

impl HighlightSnapshot {
    /// Save the tags of the matched line, then paint the match. Returns [`None`] if the
    /// row doesn't exist.
    pub fn apply(document: &mut Document, search_match: &SearchMatch) -> Option<Self> {
        let generation = document.line(search_match.row)?.generation();
        let tags = document.tags_mut(search_match.row)?;
        let saved_tags = tags.to_vec();
        apply_search_overlay(tags, search_match.render_col, search_match.len);
        Some(Self {
            row: search_match.row,
            generation,
            saved_tags,
        })
    }

    #[must_use]
    pub fn row(&self) -> RowIndex { self.row }

    /// Put the saved tags back. If the line has been re-classified since, or it is
    /// gone, the match is already erased and nothing is written.
    pub fn restore(self, document: &mut Document) {
        let unchanged = document
            .line(self.row)
            .is_some_and(|line| line.generation() == self.generation);
        if unchanged
            && let Some(tags) = document.tags_mut(self.row)
            && tags.len() == self.saved_tags.len()
        {
            tags.copy_from_slice(&self.saved_tags);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{C_PROFILE, HighlightContext, assert_eq2, col, render_col, row,
                tags_to_string};

    fn doc_with(lines: &[&str]) -> Document {
        let mut doc = Document::default();
        doc.load_lines(lines, HighlightContext::new(Some(&C_PROFILE), &[]));
        doc
    }

    #[test]
    fn test_find_forward_wraps() {
        let doc = doc_with(&["foo", "bar", "foo bar"]);
        let first = find_next(&doc, b"bar", None, SearchDirection::Forward);
        assert_eq2!(first.map(|it| it.row), Some(row(1)));

        let second = find_next(&doc, b"bar", Some(row(1)), SearchDirection::Forward);
        assert_eq2!(second.map(|it| (it.row, it.col)), Some((row(2), col(4))));

        let third = find_next(&doc, b"bar", Some(row(2)), SearchDirection::Forward);
        assert_eq2!(third.map(|it| it.row), Some(row(1)));
    }

    #[test]
    fn test_find_backward_wraps() {
        let doc = doc_with(&["foo", "bar", "foo bar"]);
        let it = find_next(&doc, b"foo", Some(row(0)), SearchDirection::Backward);
        assert_eq2!(it.map(|it| it.row), Some(row(2)));

        // Without a previous match, the direction is ignored.
        let it = find_next(&doc, b"foo", None, SearchDirection::Backward);
        assert_eq2!(it.map(|it| it.row), Some(row(0)));
    }

    #[test]
    fn test_find_matches_rendered_content() {
        let doc = doc_with(&["\tneedle"]);
        let it = find_next(&doc, b"needle", None, SearchDirection::Forward);
        assert_eq2!(
            it,
            Some(SearchMatch {
                row: row(0),
                render_col: render_col(8),
                col: col(1),
                len: 6,
            })
        );
    }

    #[test]
    fn test_find_nothing() {
        let doc = doc_with(&["abc"]);
        assert_eq2!(find_next(&doc, b"", None, SearchDirection::Forward), None);
        assert_eq2!(find_next(&doc, b"xyz", None, SearchDirection::Forward), None);
        let empty = Document::default();
        assert_eq2!(find_next(&empty, b"a", None, SearchDirection::Forward), None);
    }

    #[test]
    fn test_snapshot_apply_and_restore() {
        let mut doc = doc_with(&["if x = 10;"]);
        let before = tags_to_string(doc.lines()[0].tags());
        assert_eq2!(before, "kk.....nn.");

        let search_match = find_next(&doc, b"x = 1", None, SearchDirection::Forward);
        let Some(search_match) = search_match else {
            panic!("expected a match");
        };
        let snapshot = HighlightSnapshot::apply(&mut doc, &search_match);
        assert_eq2!(tags_to_string(doc.lines()[0].tags()), "kk.?????n.");

        if let Some(snapshot) = snapshot {
            snapshot.restore(&mut doc);
        }
        assert_eq2!(tags_to_string(doc.lines()[0].tags()), before);
    }

    #[test]
    fn test_restore_skips_line_reclassified_since() {
        let mut doc = doc_with(&["x = 10;"]);
        assert_eq2!(tags_to_string(doc.lines()[0].tags()), "....nn.");

        let Some(search_match) = find_next(&doc, b"10", None, SearchDirection::Forward)
        else {
            panic!("expected a match");
        };
        let snapshot = HighlightSnapshot::apply(&mut doc, &search_match);
        assert_eq2!(tags_to_string(doc.lines()[0].tags()), "....??.");

        // Same length, different tags: the profile is gone.
        doc.rehighlight_all(HighlightContext::default());
        assert_eq2!(tags_to_string(doc.lines()[0].tags()), ".......");

        if let Some(snapshot) = snapshot {
            snapshot.restore(&mut doc);
        }
        assert_eq2!(tags_to_string(doc.lines()[0].tags()), ".......");
    }
}
