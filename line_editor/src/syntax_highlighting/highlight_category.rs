// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumIter, EnumString};

/// Classification of a single rendered byte. This is a closed set, so the highlighter is
/// a plain state machine over bytes and never needs dynamic dispatch.
///
/// [`SearchMatch`] and [`Marker`] are overlays. They are never produced by the base
/// classification pass; they are written on top of it.
///
/// [`SearchMatch`]: Self::SearchMatch
/// [`Marker`]: Self::Marker
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum HighlightCategory {
    #[default]
    Normal,
    LineComment,
    BlockComment,
    KeywordPrimary,
    KeywordSecondary,
    String,
    Number,
    SearchMatch,
    Marker,
}

impl HighlightCategory {
    /// One character per category. Handy to dump a line's tags next to its rendered
    /// content, one column per byte.
    ///
    /// | char | category           |
    /// | :--- | :----------------- |
    /// | `.`  | `Normal`           |
    /// | `c`  | `LineComment`      |
    /// | `C`  | `BlockComment`     |
    /// | `k`  | `KeywordPrimary`   |
    /// | `K`  | `KeywordSecondary` |
    /// | `s`  | `String`           |
    /// | `n`  | `Number`           |
    /// | `?`  | `SearchMatch`      |
    /// | `@`  | `Marker`           |
    #[must_use]
    pub fn as_tag_char(self) -> char {
        match self {
            HighlightCategory::Normal => '.',
            HighlightCategory::LineComment => 'c',
            HighlightCategory::BlockComment => 'C',
            HighlightCategory::KeywordPrimary => 'k',
            HighlightCategory::KeywordSecondary => 'K',
            HighlightCategory::String => 's',
            HighlightCategory::Number => 'n',
            HighlightCategory::SearchMatch => '?',
            HighlightCategory::Marker => '@',
        }
    }

    /// SGR foreground color code a renderer can use for this category.
    #[must_use]
    pub fn as_sgr_fg_code(self) -> u8 {
        match self {
            HighlightCategory::LineComment | HighlightCategory::BlockComment => 36,
            HighlightCategory::KeywordPrimary => 33,
            HighlightCategory::KeywordSecondary => 32,
            HighlightCategory::String => 35,
            HighlightCategory::Number => 31,
            HighlightCategory::SearchMatch => 34,
            HighlightCategory::Marker => 94,
            HighlightCategory::Normal => 37,
        }
    }

    /// `true` for the two transient overlay categories.
    #[must_use]
    pub fn is_overlay(self) -> bool {
        matches!(self, HighlightCategory::SearchMatch | HighlightCategory::Marker)
    }
}

/// Render a tag array as a string, using [`HighlightCategory::as_tag_char()`].
#[must_use]
pub fn tags_to_string(tags: &[HighlightCategory]) -> String {
    tags.iter().map(|it| it.as_tag_char()).collect()
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, str::FromStr};

    use strum::IntoEnumIterator;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_tag_chars_are_unique() {
        let chars: HashSet<char> =
            HighlightCategory::iter().map(HighlightCategory::as_tag_char).collect();
        assert_eq2!(chars.len(), HighlightCategory::iter().count());
    }

    #[test]
    fn test_display_and_from_str() {
        assert_eq2!(HighlightCategory::KeywordSecondary.to_string(), "keyword_secondary");
        assert_eq2!(
            HighlightCategory::from_str("block_comment").ok(),
            Some(HighlightCategory::BlockComment)
        );
    }

    #[test]
    fn test_overlays() {
        let overlays: Vec<_> =
            HighlightCategory::iter().filter(|it| it.is_overlay()).collect();
        assert_eq2!(
            overlays,
            vec![HighlightCategory::SearchMatch, HighlightCategory::Marker]
        );
    }
}
