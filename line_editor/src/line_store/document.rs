// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The [`Document`] is the ordered sequence of [`Line`]s being edited. Every mutation
//! goes through it, and each one leaves the document fully consistent before returning:
//!
//! 1. the raw bytes are edited,
//! 2. the affected lines are re-rendered (tab expansion),
//! 3. the affected lines are re-classified, and the block comment state is propagated
//!    down the document for as long as it keeps changing,
//! 4. [`Line::index()`] is renumbered for every line after a structural change.
//!
//! Out of range requests are no-ops. Marker adjustment is not done here, see
//! [`crate::MarkerTracker`]; the caller supplies the (already adjusted) markers through
//! [`HighlightContext`] so the overlay is drawn at the right place.

use crate::{ColIndex, DEBUG_LINE_EDITOR_MOD, DEFAULT_TAB_STOP, HighlightCategory,
            HighlightContext, Line, RenderColIndex, RowIndex, call_if_true,
            logical_to_rendered, rendered_to_logical};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<Line>,
    /// Incremented by every mutation, reset only by [`Document::mark_saved()`].
    dirty: usize,
    tab_stop: usize,
    /// Last stamp handed to [`Line::classify()`].
    generation: u64,
}

impl Default for Document {
    fn default() -> Self { Self::new(DEFAULT_TAB_STOP) }
}

impl Document {
    #[must_use]
    pub fn new(tab_stop: usize) -> Self {
        Self {
            lines: Vec::new(),
            dirty: 0,
            tab_stop: tab_stop.max(1),
            generation: 0,
        }
    }

    #[must_use]
    pub fn tab_stop(&self) -> usize { self.tab_stop }

    #[must_use]
    pub fn line_count(&self) -> usize { self.lines.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.lines.is_empty() }

    #[must_use]
    pub fn lines(&self) -> &[Line] { &self.lines }

    #[must_use]
    pub fn line(&self, row: RowIndex) -> Option<&Line> { self.lines.get(row.as_usize()) }

    /// Length of the raw content of `row`, or 0 if there is no such line.
    #[must_use]
    pub fn line_len(&self, row: RowIndex) -> usize { self.line(row).map_or(0, Line::len) }

    #[must_use]
    pub fn dirty(&self) -> usize { self.dirty }

    #[must_use]
    pub fn is_dirty(&self) -> bool { self.dirty > 0 }

    /// Call this after the output of [`Document::lines_to_flat_text()`] has been
    /// persisted.
    pub fn mark_saved(&mut self) { self.dirty = 0; }

    /// Count a change that doesn't touch the text, eg: a new marker.
    pub fn mark_dirty(&mut self) { self.dirty += 1; }

    /// Tag array of `row`, for callers that draw a transient overlay (eg: search
    /// matches). The next re-classification of the line discards whatever is written.
    pub fn tags_mut(&mut self, row: RowIndex) -> Option<&mut [HighlightCategory]> {
        self.lines.get_mut(row.as_usize()).map(Line::tags_mut)
    }

    #[must_use]
    pub fn logical_to_rendered(&self, row: RowIndex, col: ColIndex) -> RenderColIndex {
        self.line(row).map_or(RenderColIndex(0), |line| {
            logical_to_rendered(line.raw(), col, self.tab_stop)
        })
    }

    #[must_use]
    pub fn rendered_to_logical(&self, row: RowIndex, rcol: RenderColIndex) -> ColIndex {
        self.line(row).map_or(ColIndex(0), |line| {
            rendered_to_logical(line.raw(), rcol, self.tab_stop)
        })
    }

    /// Insert a new line holding `bytes` at `at`. Valid positions are
    /// `0..=line_count()`.
    pub fn insert_line(&mut self, at: RowIndex, bytes: &[u8], ctx: HighlightContext<'_>) {
        let at_usize = at.as_usize();
        if at_usize > self.lines.len() {
            return;
        }
        self.lines
            .insert(at_usize, Line::new(at, bytes.to_vec(), self.tab_stop));
        self.renumber_from(at);
        self.dirty += 1;
        self.rehighlight_from(at, ctx);
    }

    pub fn delete_line(&mut self, at: RowIndex, ctx: HighlightContext<'_>) {
        if at.as_usize() >= self.lines.len() {
            return;
        }
        self.lines.remove(at.as_usize());
        self.renumber_from(at);
        self.dirty += 1;
        // The line that slid into `at` may now be seeded with a different block comment
        // state.
        self.rehighlight_from(at, ctx);
    }

    /// Insert `byte` at `col`. A column past the end of the line appends.
    pub fn insert_char(
        &mut self,
        row: RowIndex,
        col: ColIndex,
        byte: u8,
        ctx: HighlightContext<'_>,
    ) {
        let tab_stop = self.tab_stop;
        let Some(line) = self.lines.get_mut(row.as_usize()) else {
            return;
        };
        let col = col.clamp_to(line.len());
        line.edit_raw(tab_stop, |raw| raw.insert(col.as_usize(), byte));
        self.dirty += 1;
        self.rehighlight_from(row, ctx);
    }

    /// Delete the byte at `col`. There must be a byte there, or nothing happens.
    pub fn delete_char(&mut self, row: RowIndex, col: ColIndex, ctx: HighlightContext<'_>) {
        let tab_stop = self.tab_stop;
        let Some(line) = self.lines.get_mut(row.as_usize()) else {
            return;
        };
        if col.as_usize() >= line.len() {
            return;
        }
        line.edit_raw(tab_stop, |raw| {
            raw.remove(col.as_usize());
        });
        self.dirty += 1;
        self.rehighlight_from(row, ctx);
    }

    /// Append `bytes` to the end of `row`.
    pub fn append_bytes(&mut self, row: RowIndex, bytes: &[u8], ctx: HighlightContext<'_>) {
        let tab_stop = self.tab_stop;
        let Some(line) = self.lines.get_mut(row.as_usize()) else {
            return;
        };
        line.edit_raw(tab_stop, |raw| raw.extend_from_slice(bytes));
        self.dirty += 1;
        self.rehighlight_from(row, ctx);
    }

    /// Truncate `row` at `col` and insert the remainder as a new line right after it.
    /// `col` is clamped to the line length, so splitting at the end adds an empty line.
    ///
    /// ```text
    /// R ┌──────┐                    R ┌──────┐
    /// 0 │abcdef│ split (0, 3) ───▶  0 │abc   │
    ///   └──────┘                    1 │def   │
    ///   C012345                       └──────┘
    /// ```
    pub fn split_line(&mut self, row: RowIndex, col: ColIndex, ctx: HighlightContext<'_>) {
        let tab_stop = self.tab_stop;
        let Some(line) = self.lines.get_mut(row.as_usize()) else {
            return;
        };
        let col = col.clamp_to(line.len());
        let mut tail = Vec::new();
        line.edit_raw(tab_stop, |raw| tail = raw.split_off(col.as_usize()));

        let new_row = row + 1;
        self.lines
            .insert(new_row.as_usize(), Line::new(new_row, tail, tab_stop));
        self.renumber_from(new_row);
        self.dirty += 1;
        self.rehighlight_from(row, ctx);
    }

    /// Append all of `row` onto the previous line, then delete `row`. Returns the length
    /// of the previous line before the append, which is where the caret belongs after
    /// the join. The first row has nothing to join with, and returns [`None`].
    pub fn join_with_previous(
        &mut self,
        row: RowIndex,
        ctx: HighlightContext<'_>,
    ) -> Option<ColIndex> {
        let tab_stop = self.tab_stop;
        let prev_row = row.prev()?;
        if row.as_usize() >= self.lines.len() {
            return None;
        }

        let removed = self.lines.remove(row.as_usize());
        let prev_line = self.lines.get_mut(prev_row.as_usize())?;
        let prev_len = prev_line.len();
        prev_line.edit_raw(tab_stop, |raw| raw.extend_from_slice(removed.raw()));

        self.renumber_from(row);
        self.dirty += 1;
        self.rehighlight_from(prev_row, ctx);
        Some(ColIndex(prev_len))
    }

    /// Every line followed by `\n`, ready to be written to disk.
    #[must_use]
    pub fn lines_to_flat_text(&self) -> Vec<u8> {
        let total_len = self.lines.iter().map(|line| line.len() + 1).sum();
        let mut acc = Vec::with_capacity(total_len);
        for line in &self.lines {
            acc.extend_from_slice(line.raw());
            acc.push(b'\n');
        }
        acc
    }

    /// Replace the content with `lines` (newline stripped), inserted one at a time in
    /// order. The result is a freshly loaded document, so it is not dirty.
    pub fn load_lines<I, B>(&mut self, lines: I, ctx: HighlightContext<'_>)
    where
        I: IntoIterator<Item = B>,
        B: AsRef<[u8]>,
    {
        self.lines.clear();
        for bytes in lines {
            let at = RowIndex(self.lines.len());
            self.insert_line(at, bytes.as_ref(), ctx);
        }
        self.dirty = 0;

        call_if_true!(DEBUG_LINE_EDITOR_MOD, {
            tracing::debug!(
                message = "📜 document loaded",
                line_count = self.lines.len(),
            );
        });
    }

    /// Classify `start`, then keep going down the document for as long as a line's
    /// block comment state at the end differs from what the next line was last
    /// classified with. Returns the number of lines that were classified.
    pub fn rehighlight_from(&mut self, start: RowIndex, ctx: HighlightContext<'_>) -> usize {
        let tab_stop = self.tab_stop;
        let mut row = start.as_usize();
        let mut count = 0;

        while row < self.lines.len() {
            let seed = row
                .checked_sub(1)
                .and_then(|prev| self.lines.get(prev))
                .is_some_and(Line::comment_state_at_end);
            self.generation += 1;
            let generation = self.generation;
            let Some(line) = self.lines.get_mut(row) else {
                break;
            };
            if count > 0 && line.comment_state_at_start() == Some(seed) {
                break;
            }
            line.classify(seed, ctx, tab_stop, generation);
            count += 1;
            row += 1;
        }

        if count > 1 {
            call_if_true!(DEBUG_LINE_EDITOR_MOD, {
                tracing::debug!(
                    message = "🖍️ block comment state propagated",
                    start = %start,
                    lines_classified = count,
                );
            });
        }

        count
    }

    /// Classify every line from the top, eg: after the language profile changed.
    pub fn rehighlight_all(&mut self, ctx: HighlightContext<'_>) {
        let tab_stop = self.tab_stop;
        let mut seed = false;
        for line in &mut self.lines {
            self.generation += 1;
            line.classify(seed, ctx, tab_stop, self.generation);
            seed = line.comment_state_at_end();
        }
    }

    fn renumber_from(&mut self, start: RowIndex) {
        for (index, line) in self.lines.iter_mut().enumerate().skip(start.as_usize()) {
            line.set_index(RowIndex(index));
        }
    }
}
