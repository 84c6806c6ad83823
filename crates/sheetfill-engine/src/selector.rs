//! Parsing of user-entered column and row selectors
//!
//! Selectors arrive as free text typed into a form: columns as comma-separated
//! letters (`"A,C,F"`), rows as comma-separated integers and inclusive ranges
//! (`"2,5-9,12"`). Parsing happens before any cell is touched, so a malformed
//! selector never leaves a workbook half-filled.

use std::collections::BTreeSet;

use crate::error::{Error, Result};

/// Parse a comma-separated list of column letters into 1-based indices
///
/// Empty tokens are discarded, so `"A,,C,"` parses the same as `"A,C"`.
/// Duplicates collapse to the first occurrence; order is otherwise preserved.
///
/// An empty result is valid: a fill with no selected columns writes nothing.
pub fn parse_columns(text: &str) -> Result<Vec<u16>> {
    let mut columns = Vec::new();
    for token in text.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let col = parse_column(token)?;
        if !columns.contains(&col) {
            columns.push(col);
        }
    }
    Ok(columns)
}

/// Map a single column letter to its 1-based index (A = 1, ..., Z = 26)
///
/// Only single-letter columns are supported; multi-letter columns such as
/// "AA" are rejected rather than decoded base-26.
pub fn parse_column(text: &str) -> Result<u16> {
    let text = text.trim();
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => {
            Ok(c.to_ascii_uppercase() as u16 - 'A' as u16 + 1)
        }
        _ => Err(Error::InvalidColumn(text.to_string())),
    }
}

/// Parse a comma-separated list of rows and inclusive ranges into a sorted set
///
/// A token containing `-` is an inclusive range `start-end`; a reversed range
/// (`"9-5"`) contributes nothing. Unlike columns, an empty token is a
/// malformed integer and fails.
///
/// An empty input string yields the empty set, which is a valid selector.
pub fn parse_rows(text: &str) -> Result<BTreeSet<u32>> {
    let mut rows = BTreeSet::new();
    if text.trim().is_empty() {
        return Ok(rows);
    }

    for token in text.split(',') {
        let token = token.trim();
        if let Some((start, end)) = token.split_once('-') {
            let start = parse_row(start.trim())?;
            let end = parse_row(end.trim())?;
            rows.extend(start..=end);
        } else {
            rows.insert(parse_row(token)?);
        }
    }
    Ok(rows)
}

fn parse_row(text: &str) -> Result<u32> {
    let row: u32 = text
        .parse()
        .map_err(|_| Error::InvalidRow(text.to_string()))?;
    // Rows are 1-based
    if row == 0 {
        return Err(Error::InvalidRow(text.to_string()));
    }
    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_parse_columns_letters() {
        assert_eq!(parse_columns("A").unwrap(), vec![1]);
        assert_eq!(parse_columns("a").unwrap(), vec![1]);
        assert_eq!(parse_columns("Z").unwrap(), vec![26]);
        assert_eq!(parse_columns("A,C,F").unwrap(), vec![1, 3, 6]);
        assert_eq!(parse_columns(" B , d ").unwrap(), vec![2, 4]);
    }

    #[test]
    fn test_parse_columns_discards_empty_tokens() {
        assert_eq!(parse_columns("").unwrap(), Vec::<u16>::new());
        assert_eq!(parse_columns(" , ,").unwrap(), Vec::<u16>::new());
        assert_eq!(parse_columns("A,,C,").unwrap(), vec![1, 3]);
    }

    #[test]
    fn test_parse_columns_dedups_in_order() {
        assert_eq!(parse_columns("C,A,C,a").unwrap(), vec![3, 1]);
    }

    #[test]
    fn test_parse_columns_rejects_multi_letter() {
        assert!(parse_columns("AA").is_err());
        assert!(parse_columns("A,AB").is_err());
        assert!(parse_columns("1").is_err());
        assert!(parse_columns("A-C").is_err());
    }

    #[test]
    fn test_parse_rows_singles_and_ranges() {
        let rows: Vec<u32> = parse_rows("3,5-7,2").unwrap().into_iter().collect();
        assert_eq!(rows, vec![2, 3, 5, 6, 7]);
    }

    #[test]
    fn test_parse_rows_dedups() {
        let rows: Vec<u32> = parse_rows("5,5,4-6").unwrap().into_iter().collect();
        assert_eq!(rows, vec![4, 5, 6]);
    }

    #[test]
    fn test_parse_rows_reversed_range_is_empty() {
        assert!(parse_rows("9-5").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rows_empty_input() {
        assert!(parse_rows("").unwrap().is_empty());
        assert!(parse_rows("   ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rows_errors() {
        assert!(parse_rows("x").is_err());
        assert!(parse_rows("3,").is_err()); // trailing comma is a malformed integer
        assert!(parse_rows("0").is_err()); // rows are 1-based
        assert!(parse_rows("1-").is_err());
        assert!(parse_rows("-3").is_err());
        assert!(parse_rows("2.5").is_err());
    }

    proptest! {
        #[test]
        fn prop_range_tokens_expand_inclusively(start in 1u32..500, len in 0u32..50) {
            let end = start + len;
            let rows = parse_rows(&format!("{}-{}", start, end)).unwrap();
            prop_assert_eq!(rows.len() as u32, len + 1);
            prop_assert!(rows.iter().all(|&r| r >= start && r <= end));
        }

        #[test]
        fn prop_parsed_rows_are_sorted_and_unique(tokens in proptest::collection::vec(1u32..1000, 1..20)) {
            let text = tokens.iter().map(|r| r.to_string()).collect::<Vec<_>>().join(",");
            let rows: Vec<u32> = parse_rows(&text).unwrap().into_iter().collect();
            let mut expected: Vec<u32> = tokens.clone();
            expected.sort_unstable();
            expected.dedup();
            prop_assert_eq!(rows, expected);
        }
    }
}
