// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use crate::Document;

/// Counts for a status line. Characters are raw bytes, newlines not included. A word is
/// a run of non whitespace bytes within one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DocumentStats {
    pub line_count: usize,
    pub char_count: usize,
    pub word_count: usize,
}

impl DocumentStats {
    #[must_use]
    pub fn from_document(document: &Document) -> Self {
        document
            .lines()
            .iter()
            .fold(DocumentStats::default(), |mut acc, line| {
                acc.line_count += 1;
                acc.char_count += line.len();
                acc.word_count += line
                    .raw()
                    .split(u8::is_ascii_whitespace)
                    .filter(|word| !word.is_empty())
                    .count();
                acc
            })
    }
}

impl Display for DocumentStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{} lines, {} words, {} chars",
            self.line_count, self.word_count, self.char_count
        )
    }
}
