// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Tab expansion, and the mapping between logical and rendered columns.
//!
//! ```text
//! raw      : a ⇥ b            (⇥ is a single '\t' byte)
//! logical  : 0 1 2
//!
//! rendered : a · · · · · · · b  (tab stop = 8)
//! rcol     : 0 1 2 3 4 5 6 7 8
//! ```
//!
//! Every function in this module uses the same expansion rule ([`advance()`]), so
//! [`render_line()`], [`logical_to_rendered()`] and [`rendered_to_logical()`] can never
//! disagree about where a byte ends up.

use crate::{ColIndex, RenderColIndex};

/// Default width of a tab stop, in rendered columns.
pub const DEFAULT_TAB_STOP: usize = 8;

pub const TAB: u8 = b'\t';

/// Rendered width after emitting `byte` when the rendered width so far is `rx`.
fn advance(rx: usize, byte: u8, tab_stop: usize) -> usize {
    if byte == TAB {
        // Jump to the next multiple of the tab stop (always at least one column).
        rx + (tab_stop - rx % tab_stop)
    } else {
        rx + 1
    }
}

/// The tab stop actually used. A zero tab stop would make tabs collapse, so it is
/// treated as 1.
fn sanitize(tab_stop: usize) -> usize { tab_stop.max(1) }

/// Produce the display form of `raw`: tabs become spaces up to the next multiple of
/// `tab_stop`, every other byte passes through unchanged.
#[must_use]
pub fn render_line(raw: &[u8], tab_stop: usize) -> Vec<u8> {
    let tab_stop = sanitize(tab_stop);
    let tab_count = raw.iter().filter(|&&byte| byte == TAB).count();
    let mut acc = Vec::with_capacity(raw.len() + tab_count * (tab_stop - 1));
    for &byte in raw {
        if byte == TAB {
            let next = advance(acc.len(), byte, tab_stop);
            acc.resize(next, b' ');
        } else {
            acc.push(byte);
        }
    }
    acc
}

/// Rendered column of the logical column `col`. Columns past the end of the line are
/// treated as the end of the line.
#[must_use]
pub fn logical_to_rendered(raw: &[u8], col: ColIndex, tab_stop: usize) -> RenderColIndex {
    let tab_stop = sanitize(tab_stop);
    let end = col.as_usize().min(raw.len());
    let rx = raw[..end]
        .iter()
        .fold(0, |rx, &byte| advance(rx, byte, tab_stop));
    RenderColIndex(rx)
}

/// Logical column that produced the rendered column `rcol`. This is the first logical
/// column whose rendered width, after emitting it, exceeds `rcol`. A position inside an
/// expanded tab resolves to the tab itself. Positions past the end of the rendered line
/// resolve to the line length.
#[must_use]
pub fn rendered_to_logical(raw: &[u8], rcol: RenderColIndex, tab_stop: usize) -> ColIndex {
    let tab_stop = sanitize(tab_stop);
    let mut cur_rx = 0;
    for (cx, &byte) in raw.iter().enumerate() {
        cur_rx = advance(cur_rx, byte, tab_stop);
        if cur_rx > rcol.as_usize() {
            return ColIndex(cx);
        }
    }
    ColIndex(raw.len())
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{assert_eq2, col, render_col};

    #[test_case(b"abc", b"abc" ; "no tabs")]
    #[test_case(b"\tx", b"        x" ; "leading tab")]
    #[test_case(b"ab\tc", b"ab      c" ; "tab mid stop")]
    #[test_case(b"abcdefgh\tz", b"abcdefgh        z" ; "tab on stop boundary")]
    #[test_case(b"", b"" ; "empty line")]
    fn test_render_line(raw: &[u8], expected: &[u8]) {
        assert_eq2!(render_line(raw, DEFAULT_TAB_STOP), expected.to_vec());
    }

    #[test]
    fn test_render_length_property() {
        for raw in [&b"plain"[..], b"\t", b"a\tb\tc", b"        "] {
            let rendered = render_line(raw, DEFAULT_TAB_STOP);
            assert!(rendered.len() >= raw.len());
            assert_eq2!(rendered.len() == raw.len(), !raw.contains(&TAB));
        }
    }

    #[test]
    fn test_logical_to_rendered() {
        // R ┌──────────────────┐
        // 0 │a⇥·······b        │
        //   └──────────────────┘
        //   C0 1       2
        let raw = b"a\tb";
        assert_eq2!(logical_to_rendered(raw, col(0), 8), render_col(0));
        assert_eq2!(logical_to_rendered(raw, col(1), 8), render_col(1));
        assert_eq2!(logical_to_rendered(raw, col(2), 8), render_col(8));
        assert_eq2!(logical_to_rendered(raw, col(3), 8), render_col(9));
        // Past the end clamps.
        assert_eq2!(logical_to_rendered(raw, col(99), 8), render_col(9));
    }

    #[test]
    fn test_rendered_to_logical_inside_tab_span() {
        let raw = b"a\tb";
        assert_eq2!(rendered_to_logical(raw, render_col(0), 8), col(0));
        for rx in 1..8 {
            assert_eq2!(rendered_to_logical(raw, render_col(rx), 8), col(1));
        }
        assert_eq2!(rendered_to_logical(raw, render_col(8), 8), col(2));
        assert_eq2!(rendered_to_logical(raw, render_col(42), 8), col(3));
    }

    #[test]
    fn test_round_trip_resolves_to_same_column() {
        let raw = b"\tif\t(x)\t\t{";
        for c in 0..=raw.len() {
            let rx = logical_to_rendered(raw, col(c), 4);
            assert_eq2!(rendered_to_logical(raw, rx, 4), col(c));
        }
    }

    #[test]
    fn test_rendered_matches_mapper() {
        let raw = b"x\ty\t\tz";
        let rendered = render_line(raw, 4);
        for (c, &byte) in raw.iter().enumerate() {
            if byte != TAB {
                let rx = logical_to_rendered(raw, col(c), 4).as_usize();
                assert_eq2!(rendered[rx], byte);
            }
        }
    }

    #[test]
    fn test_zero_tab_stop_is_sanitized() {
        assert_eq2!(render_line(b"\t", 0), b" ".to_vec());
    }
}
