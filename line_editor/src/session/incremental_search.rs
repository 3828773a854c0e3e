// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumString};

use crate::{Caret, EditorSession, HighlightSnapshot, RowIndex, SearchDirection,
            SearchMatch, find_next};

/// What the search prompt reports after each key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum SearchKey {
    /// The query text changed. Search again from the top.
    Edited,
    /// Next match (right / down arrow).
    Next,
    /// Previous match (left / up arrow).
    Previous,
    /// Keep the caret where the last match put it (enter).
    Accept,
    /// Put the caret back where it was when the search started (escape).
    Cancel,
}

/// State of one interactive search, from the moment the prompt opens until it is
/// accepted or cancelled. Every key first erases the previous match highlight, then
/// (for the non terminal keys) finds the next match, moves the caret there and paints
/// the match.
///
/// ```text
/// start() ─▶ on_key(Edited) ─▶ on_key(Next) ─▶ ... ─▶ on_key(Accept | Cancel)
/// ```
#[derive(Debug)]
pub struct IncrementalSearch {
    saved_caret: Caret,
    maybe_last_match: Option<RowIndex>,
    direction: SearchDirection,
    maybe_snapshot: Option<HighlightSnapshot>,
}

impl IncrementalSearch {
    #[must_use]
    pub fn start(session: &EditorSession) -> Self {
        Self {
            saved_caret: session.caret(),
            maybe_last_match: None,
            direction: SearchDirection::Forward,
            maybe_snapshot: None,
        }
    }

    /// Handle one key from the prompt, with `query` being the prompt's current text.
    /// Returns the match the caret moved to, if any.
    pub fn on_key(
        &mut self,
        session: &mut EditorSession,
        query: &str,
        key: SearchKey,
    ) -> Option<SearchMatch> {
        if let Some(snapshot) = self.maybe_snapshot.take() {
            snapshot.restore(session.document_mut());
        }

        match key {
            SearchKey::Accept => {
                self.reset();
                return None;
            }
            SearchKey::Cancel => {
                self.reset();
                session.set_caret(self.saved_caret);
                return None;
            }
            SearchKey::Next => self.direction = SearchDirection::Forward,
            SearchKey::Previous => self.direction = SearchDirection::Backward,
            SearchKey::Edited => self.reset(),
        }

        let search_match = find_next(
            session.document(),
            query.as_bytes(),
            self.maybe_last_match,
            self.direction,
        )?;

        self.maybe_last_match = Some(search_match.row);
        session.set_caret(Caret::new(search_match.row, search_match.col));
        self.maybe_snapshot = HighlightSnapshot::apply(session.document_mut(), &search_match);

        tracing::debug!(
            message = "🔍 search match",
            query = %query,
            search_match = ?search_match,
        );

        Some(search_match)
    }

    fn reset(&mut self) {
        self.maybe_last_match = None;
        self.direction = SearchDirection::Forward;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{C_PROFILE, assert_eq2, col, row, tags_to_string};

    fn session_with(lines: &[&str]) -> EditorSession {
        let mut session = EditorSession::default();
        session.set_profile(Some(&C_PROFILE));
        session.load_lines(lines);
        session
    }

    fn tag_lines(session: &EditorSession) -> Vec<String> {
        session
            .document()
            .lines()
            .iter()
            .map(|line| tags_to_string(line.tags()))
            .collect()
    }

    #[test]
    fn test_search_moves_caret_and_paints_one_match_at_a_time() {
        // R ┌───────────┐
        // 0 │x = 1;     │
        // 1 │\tyy;      │ (tab expands to 8 columns)
        // 2 │z = yy;    │
        //   └───────────┘
        let mut session = session_with(&["x = 1;", "\tyy;", "z = yy;"]);
        session.set_caret(Caret::new(0, 2));
        let mut search = IncrementalSearch::start(&session);

        let first = search.on_key(&mut session, "yy", SearchKey::Edited);
        assert_eq2!(first.map(|it| it.row), Some(row(1)));
        assert_eq2!(session.caret(), Caret::new(1, 1));
        assert_eq2!(
            tag_lines(&session),
            vec!["....n.", "........??.", "......."]
        );

        let second = search.on_key(&mut session, "yy", SearchKey::Next);
        assert_eq2!(second.map(|it| it.row), Some(row(2)));
        assert_eq2!(session.caret(), Caret::new(2, 4));
        assert_eq2!(
            tag_lines(&session),
            vec!["....n.", "...........", "....??."]
        );

        let third = search.on_key(&mut session, "yy", SearchKey::Previous);
        assert_eq2!(third.map(|it| it.row), Some(row(1)));

        search.on_key(&mut session, "yy", SearchKey::Accept);
        assert_eq2!(session.caret(), Caret::new(1, 1));
        assert_eq2!(
            tag_lines(&session),
            vec!["....n.", "...........", "......."]
        );
    }

    #[test]
    fn test_cancel_restores_caret() {
        let mut session = session_with(&["abc", "xyz"]);
        session.set_caret(Caret::new(0, 1));
        let mut search = IncrementalSearch::start(&session);
        assert!(search.on_key(&mut session, "xy", SearchKey::Edited).is_some());
        assert_eq2!(session.caret(), Caret::new(1, 0));

        assert_eq2!(search.on_key(&mut session, "xy", SearchKey::Cancel), None);
        assert_eq2!(session.caret().row, row(0));
        assert_eq2!(session.caret().col, col(1));
        assert_eq2!(tag_lines(&session), vec!["...", "..."]);
    }

    #[test]
    fn test_no_match_leaves_caret() {
        let mut session = session_with(&["abc"]);
        let mut search = IncrementalSearch::start(&session);
        assert_eq2!(search.on_key(&mut session, "q", SearchKey::Edited), None);
        assert_eq2!(session.caret(), Caret::default());
    }
}
