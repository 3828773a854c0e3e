// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The per line classification pass. [`classify_line()`] is a pure function of the
//! rendered bytes, the active [`LanguageProfile`], and whether a block comment was open
//! at the end of the previous line. Cross line propagation (re-running this pass on the
//! following lines when the block comment state changes) lives in
//! [`crate::Document::rehighlight_from()`].
//!
//! Priority at every position, highest first:
//!
//! | # | Rule                                                                   |
//! | - | ---------------------------------------------------------------------- |
//! | a | line comment prefix, outside string and block comment -> rest of line  |
//! | b | inside block comment until its end delimiter, or a start delimiter     |
//! | c | inside string (backslash escapes the next byte), until closing quote   |
//! | d | quote byte opens a string                                              |
//! | e | digit after a separator or number, `.` after a number                  |
//! | f | longest keyword after a separator, followed by a separator             |
//! | g | everything else is [`HighlightCategory::Normal`]                        |

use smallvec::SmallVec;

use crate::{HighlightCategory, LanguageProfile, Marker, RenderColIndex};

/// Bytes (other than whitespace and NUL) that end a word.
pub const SEPARATOR_BYTES: &[u8] = b",.()+-/*=~%<>[];";

/// Everything the classification of a line depends on, other than the line itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct HighlightContext<'a> {
    pub profile: Option<&'a LanguageProfile>,
    pub markers: &'a [Marker],
}

impl<'a> HighlightContext<'a> {
    #[must_use]
    pub fn new(profile: Option<&'a LanguageProfile>, markers: &'a [Marker]) -> Self {
        Self { profile, markers }
    }
}

/// Result of classifying one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    /// One tag per rendered byte.
    pub tags: Vec<HighlightCategory>,
    /// Is a block comment still open at the end of the line?
    pub ends_in_block_comment: bool,
}

#[must_use]
pub fn is_separator(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c | b'\0')
        || SEPARATOR_BYTES.contains(&byte)
}

fn is_quote(byte: u8) -> bool { matches!(byte, b'"' | b'\'') }

/// Classify every byte of `rendered`. Without a profile, every byte is
/// [`HighlightCategory::Normal`] and no block comment can be open.
#[must_use]
pub fn classify_line(
    rendered: &[u8],
    maybe_profile: Option<&LanguageProfile>,
    starts_in_block_comment: bool,
) -> ClassifiedLine {
    let mut tags = vec![HighlightCategory::Normal; rendered.len()];

    let Some(profile) = maybe_profile else {
        return ClassifiedLine {
            tags,
            ends_in_block_comment: false,
        };
    };

    let line_comment = profile.line_comment_bytes();
    let block_comment = profile.block_comment_bytes();
    let flags = profile.flags;

    let mut prev_sep = true;
    let mut in_string: Option<u8> = None;
    // A profile without block comments can't continue one from the previous line.
    let mut in_block_comment = starts_in_block_comment && block_comment.is_some();

    let len = rendered.len();
    let mut i = 0;
    while i < len {
        let byte = rendered[i];
        let rest = &rendered[i..];
        let prev_tag = if i > 0 {
            tags[i - 1]
        } else {
            HighlightCategory::Normal
        };

        // (a) Line comment.
        if let Some(prefix) = line_comment
            && in_string.is_none()
            && !in_block_comment
            && rest.starts_with(prefix)
        {
            tags[i..].fill(HighlightCategory::LineComment);
            break;
        }

        // (b) Block comment.
        if let Some((start, end)) = block_comment
            && in_string.is_none()
        {
            if in_block_comment {
                if rest.starts_with(end) {
                    tags[i..i + end.len()].fill(HighlightCategory::BlockComment);
                    i += end.len();
                    in_block_comment = false;
                    prev_sep = true;
                } else {
                    tags[i] = HighlightCategory::BlockComment;
                    i += 1;
                }
                continue;
            }
            if rest.starts_with(start) {
                tags[i..i + start.len()].fill(HighlightCategory::BlockComment);
                i += start.len();
                in_block_comment = true;
                continue;
            }
        }

        // (c) & (d) Strings.
        if flags.highlight_strings {
            if let Some(quote) = in_string {
                tags[i] = HighlightCategory::String;
                if byte == b'\\' && i + 1 < len {
                    tags[i + 1] = HighlightCategory::String;
                    i += 2;
                    continue;
                }
                if byte == quote {
                    in_string = None;
                }
                i += 1;
                prev_sep = true;
                continue;
            }
            if is_quote(byte) {
                in_string = Some(byte);
                tags[i] = HighlightCategory::String;
                i += 1;
                continue;
            }
        }

        // (e) Numbers.
        if flags.highlight_numbers
            && ((byte.is_ascii_digit()
                && (prev_sep || prev_tag == HighlightCategory::Number))
                || (byte == b'.' && prev_tag == HighlightCategory::Number))
        {
            tags[i] = HighlightCategory::Number;
            i += 1;
            prev_sep = false;
            continue;
        }

        // (f) Keywords.
        if prev_sep && let Some((keyword_len, category)) = match_keyword(rest, profile) {
            tags[i..i + keyword_len].fill(category);
            i += keyword_len;
            prev_sep = false;
            continue;
        }

        // (g) Normal.
        prev_sep = is_separator(byte);
        i += 1;
    }

    ClassifiedLine {
        tags,
        ends_in_block_comment: in_block_comment,
    }
}

/// Longest keyword that `rest` starts with and that is followed by a separator (or the
/// end of the line).
fn match_keyword(
    rest: &[u8],
    profile: &LanguageProfile,
) -> Option<(usize, HighlightCategory)> {
    let hits: SmallVec<[(usize, HighlightCategory); 4]> = profile
        .keyword_patterns()
        .filter(|pattern| {
            rest.starts_with(pattern.bytes)
                && is_separator(rest.get(pattern.bytes.len()).copied().unwrap_or(b'\0'))
        })
        .map(|pattern| {
            let category = if pattern.is_secondary {
                HighlightCategory::KeywordSecondary
            } else {
                HighlightCategory::KeywordPrimary
            };
            (pattern.bytes.len(), category)
        })
        .collect();
    hits.into_iter().max_by_key(|(len, _)| *len)
}

/// Force the tag at each of `render_cols` to [`HighlightCategory::Marker`]. Columns past
/// the end of the line (eg: a marker at the very end of a line) have no byte to tag and
/// are skipped.
pub fn apply_marker_overlay(
    tags: &mut [HighlightCategory],
    render_cols: impl IntoIterator<Item = RenderColIndex>,
) {
    for render_col in render_cols {
        if let Some(tag) = tags.get_mut(render_col.as_usize()) {
            *tag = HighlightCategory::Marker;
        }
    }
}

/// Tag `match_len` bytes starting at `start` as [`HighlightCategory::SearchMatch`],
/// clamped to the line.
pub fn apply_search_overlay(
    tags: &mut [HighlightCategory],
    start: RenderColIndex,
    match_len: usize,
) {
    let start = start.as_usize().min(tags.len());
    let end = (start + match_len).min(tags.len());
    tags[start..end].fill(HighlightCategory::SearchMatch);
}
