// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Plain text form of a marker list, as stored in a document's metadata file.
//!
//! Each marker is written as `column,row` followed by `_`, eg: `3,0_0,12_`. There is no
//! escaping and no header. Parsing is lenient: a number that doesn't parse becomes 0,
//! and blank tokens (eg: a trailing newline) are skipped.

use crate::Marker;

/// Suffix appended to a document's file name to get its metadata file name.
pub const METADATA_FILE_SUFFIX: &str = "_metadata";

const TOKEN_SEPARATOR: char = '_';
const FIELD_SEPARATOR: char = ',';

/// Name of the metadata file that belongs to `filename`.
#[must_use]
pub fn metadata_filename(filename: &str) -> String {
    format!("{filename}{METADATA_FILE_SUFFIX}")
}

#[must_use]
pub fn export_markers(markers: &[Marker]) -> String {
    use std::fmt::Write as _;
    let mut acc = String::new();
    for marker in markers {
        // Writing into a String can't fail.
        _ = write!(
            acc,
            "{col}{FIELD_SEPARATOR}{row}{TOKEN_SEPARATOR}",
            col = marker.col,
            row = marker.row
        );
    }
    acc
}

#[must_use]
pub fn import_markers(text: &str) -> Vec<Marker> {
    text.split(TOKEN_SEPARATOR)
        .filter(|token| !token.trim().is_empty())
        .map(|token| {
            let (col_str, row_str) = token.split_once(FIELD_SEPARATOR).unwrap_or((token, ""));
            Marker::new(parse_leading_number(row_str), parse_leading_number(col_str))
        })
        .collect()
}

/// Leading whitespace, then an optional sign, then as many decimal digits as there are.
/// Anything else ends the number. No digits, a negative value, or an overflow gives 0.
fn parse_leading_number(input: &str) -> usize {
    let trimmed = input.trim_start();
    let (is_negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if is_negative {
        return 0;
    }
    unsigned[..digits_len].parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_export() {
        let markers = [Marker::new(0, 3), Marker::new(12, 0)];
        assert_eq2!(export_markers(&markers), "3,0_0,12_");
        assert_eq2!(export_markers(&[]), "");
    }

    #[test]
    fn test_import() {
        assert_eq2!(
            import_markers("3,0_0,12_\n"),
            vec![Marker::new(0, 3), Marker::new(12, 0)]
        );
        assert_eq2!(import_markers(""), Vec::<Marker>::new());
    }

    #[test]
    fn test_export_then_import() {
        let markers = vec![Marker::new(4, 1), Marker::new(4, 1), Marker::new(0, 0)];
        assert_eq2!(import_markers(&export_markers(&markers)), markers);
    }

    #[test_case("abc,x_", 0, 0 ; "garbage is zero")]
    #[test_case("7_", 0, 7 ; "missing row")]
    #[test_case(" 12abc, 5z_", 5, 12 ; "leading number is used")]
    #[test_case("-3,-1_", 0, 0 ; "negative clamps to zero")]
    #[test_case("+2,+9_", 9, 2 ; "explicit plus sign")]
    #[test_case("99999999999999999999999,1_", 1, 0 ; "overflow is zero")]
    fn test_import_is_lenient(text: &str, expected_row: usize, expected_col: usize) {
        assert_eq2!(
            import_markers(text),
            vec![Marker::new(expected_row, expected_col)]
        );
    }

    #[test]
    fn test_metadata_filename() {
        assert_eq2!(metadata_filename("main.c"), "main.c_metadata");
    }
}
