// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Language profiles are capability descriptors. They tell the highlighter which comment
//! delimiters and keywords exist, and whether numbers and strings get highlighted. A
//! profile is picked for a file name from [`PROFILE_REGISTRY`] using
//! [`select_profile_for_filename()`].

/// Keywords that end with this byte are "secondary" keywords (eg: type names). The byte
/// itself is not part of the keyword when matching.
pub const DEFAULT_SECONDARY_KEYWORD_MARKER: u8 = b'|';

/// Which optional highlighting passes a [`LanguageProfile`] enables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HighlightFlags {
    pub highlight_numbers: bool,
    pub highlight_strings: bool,
}

impl HighlightFlags {
    pub const ALL: HighlightFlags = HighlightFlags {
        highlight_numbers: true,
        highlight_strings: true,
    };

    pub const NONE: HighlightFlags = HighlightFlags {
        highlight_numbers: false,
        highlight_strings: false,
    };
}

/// Block comment start and end delimiters, eg: `/*` and `*/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockCommentDelimiters {
    pub start: &'static str,
    pub end: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageProfile {
    /// Short name shown by a status line, eg: `c`.
    pub file_type: &'static str,
    /// Patterns starting with `.` must equal the file name's extension. Any other
    /// pattern matches if it is a substring of the file name.
    pub file_match: &'static [&'static str],
    /// Primary and secondary keywords; secondary ones end with
    /// [`Self::secondary_keyword_marker`].
    pub keywords: &'static [&'static str],
    pub secondary_keyword_marker: u8,
    pub line_comment_start: Option<&'static str>,
    pub block_comment: Option<BlockCommentDelimiters>,
    pub flags: HighlightFlags,
}

/// A keyword as the highlighter sees it: the bytes to match, and whether it is a
/// secondary keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordPattern<'a> {
    pub bytes: &'a [u8],
    pub is_secondary: bool,
}

impl LanguageProfile {
    /// Keywords with the secondary marker stripped off. Empty keywords (including a
    /// lone marker byte) are skipped, since they would match everywhere.
    pub fn keyword_patterns(&self) -> impl Iterator<Item = KeywordPattern<'static>> + '_ {
        let marker = self.secondary_keyword_marker;
        self.keywords.iter().filter_map(move |keyword| {
            let bytes = keyword.as_bytes();
            let (bytes, is_secondary) = match bytes.split_last() {
                Some((&last, rest)) if last == marker => (rest, true),
                _ => (bytes, false),
            };
            (!bytes.is_empty()).then_some(KeywordPattern {
                bytes,
                is_secondary,
            })
        })
    }

    /// Line comment prefix, if configured and not empty.
    #[must_use]
    pub fn line_comment_bytes(&self) -> Option<&'static [u8]> {
        self.line_comment_start
            .map(str::as_bytes)
            .filter(|it| !it.is_empty())
    }

    /// Block comment delimiters as bytes. Both must be present and non empty, otherwise
    /// block comment detection is disabled.
    #[must_use]
    pub fn block_comment_bytes(&self) -> Option<(&'static [u8], &'static [u8])> {
        self.block_comment
            .map(|it| (it.start.as_bytes(), it.end.as_bytes()))
            .filter(|(start, end)| !start.is_empty() && !end.is_empty())
    }

    /// Does this profile apply to `filename`?
    #[must_use]
    pub fn matches_filename(&self, filename: &str) -> bool {
        let maybe_ext = filename.rfind('.').map(|dot| &filename[dot..]);
        self.file_match.iter().any(|pattern| {
            if pattern.starts_with('.') {
                maybe_ext == Some(*pattern)
            } else {
                filename.contains(pattern)
            }
        })
    }
}

pub const C_PROFILE: LanguageProfile = LanguageProfile {
    file_type: "c",
    file_match: &[".c", ".h", ".cpp"],
    keywords: &[
        "switch", "if", "while", "for", "break", "continue", "return", "else",
        "struct", "union", "typedef", "static", "enum", "class", "case", "int|",
        "long|", "double|", "float|", "char|", "unsigned|", "signed|", "void|",
    ],
    secondary_keyword_marker: DEFAULT_SECONDARY_KEYWORD_MARKER,
    line_comment_start: Some("//"),
    block_comment: Some(BlockCommentDelimiters {
        start: "/*",
        end: "*/",
    }),
    flags: HighlightFlags::ALL,
};

/// Fixed registry of known profiles, searched in order.
pub const PROFILE_REGISTRY: &[LanguageProfile] = &[C_PROFILE];

/// Pick the first profile in [`PROFILE_REGISTRY`] that matches `filename`.
#[must_use]
pub fn select_profile_for_filename(filename: &str) -> Option<&'static LanguageProfile> {
    PROFILE_REGISTRY
        .iter()
        .find(|profile| profile.matches_filename(filename))
}
