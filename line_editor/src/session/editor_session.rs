// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`EditorSession`] owns everything one editing session needs: the [`Document`], the
//! [`Caret`], the [`MarkerTracker`], the active [`LanguageProfile`] and the
//! [`SessionConfig`]. It is the only thing that pairs a document mutation with the
//! matching marker adjustment, so markers can never drift away from their text.
//!
//! Each command follows the same order: markers are adjusted first, then the document
//! is mutated (re-rendering and re-highlighting the affected lines, with the adjusted
//! markers overlaid), then the caret moves.

use crate::{Caret, CaretDirection, ColIndex, DEBUG_LINE_EDITOR_MOD, Document,
            DocumentStats, HighlightContext, LanguageProfile, Marker, MarkerTracker,
            Region, RenderColIndex, RowIndex, SessionConfig, call_if_true,
            decl_macros::caret_on_line_or_return, export_markers, import_markers,
            select_profile_for_filename};

/// Build a [`HighlightContext`] from the session's fields, borrowing only the profile and
/// the markers, so `document` stays free to borrow mutably.
macro_rules! highlight_ctx {
    ($session:ident) => {
        HighlightContext::new($session.profile, $session.markers.markers())
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSession {
    document: Document,
    caret: Caret,
    markers: MarkerTracker,
    profile: Option<&'static LanguageProfile>,
    config: SessionConfig,
    maybe_filename: Option<String>,
}

impl Default for EditorSession {
    fn default() -> Self { Self::new(SessionConfig::default()) }
}

impl EditorSession {
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            document: Document::new(config.tab_stop),
            caret: Caret::default(),
            markers: MarkerTracker::new(config.marker_capacity, config.region_capacity),
            profile: None,
            config,
            maybe_filename: None,
        }
    }

    #[must_use]
    pub fn document(&self) -> &Document { &self.document }

    #[must_use]
    pub fn caret(&self) -> Caret { self.caret }

    #[must_use]
    pub fn markers(&self) -> &MarkerTracker { &self.markers }

    #[must_use]
    pub fn profile(&self) -> Option<&'static LanguageProfile> { self.profile }

    #[must_use]
    pub fn config(&self) -> SessionConfig { self.config }

    #[must_use]
    pub fn filename(&self) -> Option<&str> { self.maybe_filename.as_deref() }

    /// Name of the active file type for a status line, eg: `"c"`.
    #[must_use]
    pub fn file_type(&self) -> &'static str {
        self.profile.map_or("no ft", |profile| profile.file_type)
    }

    #[must_use]
    pub fn stats(&self) -> DocumentStats { DocumentStats::from_document(&self.document) }

    /// Rendered column of the caret, for placing the terminal cursor.
    #[must_use]
    pub fn caret_render_col(&self) -> RenderColIndex {
        self.document
            .logical_to_rendered(self.caret.row, self.caret.col)
    }

    /// Used by the search overlay, which has to paint and restore tags directly.
    pub(crate) fn document_mut(&mut self) -> &mut Document { &mut self.document }

    /// Remember the file name and select the profile that matches it (or none).
    pub fn set_filename(&mut self, filename: impl Into<String>) {
        let filename = filename.into();
        let maybe_profile = select_profile_for_filename(&filename);
        self.maybe_filename = Some(filename);
        self.set_profile(maybe_profile);
    }

    /// Switch profiles, and re-classify every line against the new one.
    #[tracing::instrument(skip_all)]
    pub fn set_profile(&mut self, maybe_profile: Option<&'static LanguageProfile>) {
        self.profile = maybe_profile;
        self.document.rehighlight_all(highlight_ctx!(self));
    }

    /// Replace the document with `lines` (newline stripped). The caret goes to the top,
    /// markers are cleared, and the document is not dirty afterwards.
    #[tracing::instrument(skip_all)]
    pub fn load_lines<I, B>(&mut self, lines: I)
    where
        I: IntoIterator<Item = B>,
        B: AsRef<[u8]>,
    {
        self.markers.clear();
        self.caret = Caret::default();
        self.document.load_lines(lines, highlight_ctx!(self));
    }

    /// The bytes to persist. Call [`EditorSession::mark_saved()`] once they are written.
    #[must_use]
    pub fn lines_to_flat_text(&self) -> Vec<u8> { self.document.lines_to_flat_text() }

    pub fn mark_saved(&mut self) { self.document.mark_saved(); }

    /// Insert a whole line at `at`, keeping markers in place.
    pub fn insert_line(&mut self, at: RowIndex, bytes: &[u8]) {
        if at.as_usize() > self.document.line_count() {
            return;
        }
        self.adjust_markers_on_insert_line(at);
        self.document.insert_line(at, bytes, highlight_ctx!(self));
        if self.caret.row >= at {
            self.caret.row += 1;
        }
    }

    /// Delete the whole line at `at`, moving markers that were on it.
    pub fn delete_line(&mut self, at: RowIndex) {
        let line_count = self.document.line_count();
        if at.as_usize() >= line_count {
            return;
        }
        let len_of_new_last_line = at.prev().map_or(0, |prev| self.document.line_len(prev));
        self.markers
            .adjust_on_delete_line(at, line_count - 1, len_of_new_last_line);
        self.document.delete_line(at, highlight_ctx!(self));
        if self.caret.row > at {
            self.caret.row -= 1;
        }
        self.clamp_caret();
    }

    pub fn insert_byte_at_caret(&mut self, byte: u8) {
        if self.caret.row.as_usize() == self.document.line_count() {
            self.adjust_markers_on_insert_line(self.caret.row);
            self.document
                .insert_line(self.caret.row, b"", highlight_ctx!(self));
        }

        let row = self.caret.row;
        let col = self.caret.col.clamp_to(self.document.line_len(row));
        self.markers.adjust_on_insert_char(row, col);
        self.document.insert_char(row, col, byte, highlight_ctx!(self));
        self.caret.col = col + 1;
    }

    /// At the start of a line (or past the end of the document) an empty line is
    /// inserted above the caret, otherwise the line is split at the caret.
    pub fn insert_new_line_at_caret(&mut self) {
        let Caret { row, col } = self.caret;
        if col.is_start() || row.as_usize() >= self.document.line_count() {
            self.adjust_markers_on_insert_line(row);
            self.document.insert_line(row, b"", highlight_ctx!(self));
        } else {
            let col = col.clamp_to(self.document.line_len(row));
            self.markers.adjust_on_split_line(row, col);
            self.document.split_line(row, col, highlight_ctx!(self));
        }
        self.caret = Caret::new(row + 1, 0);
    }

    /// Delete the byte left of the caret. At the start of a line, join it onto the
    /// previous line instead.
    pub fn backspace_at_caret(&mut self) {
        caret_on_line_or_return!(self);
        let Caret { row, col } = self.caret;
        let col = col.clamp_to(self.document.line_len(row));

        if col.is_start() {
            let Some(prev_row) = row.prev() else {
                return;
            };
            let prev_len = self.document.line_len(prev_row);
            self.markers.adjust_on_join_line(row, prev_len);
            if let Some(new_col) = self
                .document
                .join_with_previous(row, highlight_ctx!(self))
            {
                self.caret = Caret::new(prev_row, new_col);
            }
        } else {
            let at = col - 1;
            self.markers.adjust_on_delete_char(row, at);
            self.document.delete_char(row, at, highlight_ctx!(self));
            self.caret.col = at;
        }
    }

    /// Delete the byte under the caret, joining the next line at the end of a line.
    pub fn delete_at_caret(&mut self) {
        self.move_caret(CaretDirection::Right);
        self.backspace_at_caret();
    }

    pub fn move_caret(&mut self, direction: CaretDirection) {
        let line_count = self.document.line_count();
        let Caret { row, col } = self.caret;
        let on_line = row.as_usize() < line_count;

        match direction {
            CaretDirection::Left => {
                if !col.is_start() {
                    self.caret.col = col - 1;
                } else if let Some(prev_row) = row.prev() {
                    self.caret = Caret::new(prev_row, self.document.line_len(prev_row));
                }
            }
            CaretDirection::Right => {
                if on_line {
                    if col.as_usize() < self.document.line_len(row) {
                        self.caret.col = col + 1;
                    } else {
                        self.caret = Caret::new(row + 1, 0);
                    }
                }
            }
            CaretDirection::Up => {
                if let Some(prev_row) = row.prev() {
                    self.caret.row = prev_row;
                }
            }
            CaretDirection::Down => {
                if on_line {
                    self.caret.row = row + 1;
                }
            }
        }

        self.clamp_caret();
    }

    pub fn move_caret_home(&mut self) { self.caret.col = ColIndex(0); }

    pub fn move_caret_end(&mut self) {
        caret_on_line_or_return!(self);
        self.caret.col = ColIndex(self.document.line_len(self.caret.row));
    }

    /// Move the caret to `(row, col)`, clamped into the document.
    pub fn set_caret(&mut self, caret: Caret) {
        self.caret = caret;
        self.clamp_caret();
    }

    /// Drop a marker at the caret. When the marker collection is full, the marker is
    /// not added and a warning is logged.
    pub fn create_marker_at_caret(&mut self) {
        caret_on_line_or_return!(self);
        let marker = self.caret.as_marker();
        match self.markers.try_add_marker(marker) {
            Ok(()) => {
                self.document.mark_dirty();
                self.document
                    .rehighlight_from(marker.row, highlight_ctx!(self));
                call_if_true!(DEBUG_LINE_EDITOR_MOD, {
                    tracing::debug!(message = "🔖 marker created", marker = ?marker);
                });
            }
            Err(error) => {
                tracing::warn!(
                    message = "🔖 marker dropped",
                    marker = ?marker,
                    error = %error,
                );
            }
        }
    }

    /// Move the caret to the next marker in document order, wrapping to the first.
    pub fn jump_to_next_marker(&mut self) {
        if let Some(marker) = self.markers.next_marker_after(self.caret.as_marker()) {
            self.set_caret(marker.into());
        }
    }

    /// Store a region between two positions, each clamped into the document. Regions
    /// are not drawn, but they follow edits the same way markers do. Nothing is stored
    /// in an empty document, or when the region collection is full (a warning is
    /// logged).
    pub fn create_region(&mut self, start: Marker, end: Marker) {
        let (Some(start), Some(end)) =
            (self.clamp_to_document(start), self.clamp_to_document(end))
        else {
            return;
        };
        let region = Region::new(start, end);
        if let Err(error) = self.markers.try_add_region(region) {
            tracing::warn!(
                message = "🔖 region dropped",
                region = ?region,
                error = %error,
            );
        }
    }

    fn clamp_to_document(&self, marker: Marker) -> Option<Marker> {
        let last_row = self.document.line_count().checked_sub(1)?;
        let row = marker.row.min(RowIndex(last_row));
        Some(Marker::new(row, marker.col.clamp_to(self.document.line_len(row))))
    }

    /// Marker metadata, see [`export_markers()`].
    #[must_use]
    pub fn export_markers(&self) -> String { export_markers(self.markers.markers()) }

    /// Replace the markers with the ones in `text` (see [`import_markers()`]), clamped
    /// into the document, then redraw their overlay.
    pub fn import_markers(&mut self, text: &str) {
        let imported = import_markers(text);
        let imported_count = imported.len();
        self.markers.replace_markers(imported);
        let document = &self.document;
        self.markers
            .clamp_into(document.line_count(), |row| document.line_len(row));
        self.document.rehighlight_all(highlight_ctx!(self));

        call_if_true!(DEBUG_LINE_EDITOR_MOD, {
            tracing::debug!(
                message = "🔖 markers imported",
                imported = imported_count,
                kept = self.markers.len(),
            );
        });
    }

    /// Markers in an empty document are parked at `(0, 0)`, and the first line inserted
    /// takes them over instead of pushing them past the end.
    fn adjust_markers_on_insert_line(&mut self, at: RowIndex) {
        if !self.document.is_empty() {
            self.markers.adjust_on_insert_line(at);
        }
    }

    /// Keep the caret on a real line (or the virtual row past the end), and its column
    /// within the line.
    fn clamp_caret(&mut self) {
        let line_count = self.document.line_count();
        if self.caret.row.as_usize() > line_count {
            self.caret.row = RowIndex(line_count);
        }
        self.caret.col = self
            .caret
            .col
            .clamp_to(self.document.line_len(self.caret.row));
    }

    /// All markers on `row`, in the order they were added.
    #[must_use]
    pub fn markers_on_row(&self, row: RowIndex) -> Vec<Marker> {
        self.markers
            .markers()
            .iter()
            .filter(|marker| marker.row == row)
            .copied()
            .collect()
    }
}
