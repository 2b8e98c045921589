//! Row Selection Module
//! Parses the free-text row picker into zero-based row positions.

use polars::prelude::IdxSize;

/// Longest range one entry may materialize. The parse has no view of the
/// table, and a range past any plausible table height could only end in the
/// out-of-range fallback; rejecting it here avoids allocating the indices.
const MAX_RANGE_LEN: IdxSize = 1_000_000;

/// Parse a row-selection string into zero-based row positions.
///
/// Three forms are accepted, tried in this order:
/// - a single number: `"7"`
/// - a comma-separated list: `"1,3,5"`
/// - an inclusive range: `"2-6"`
///
/// Numbers are one-based as shown in the table. Whitespace around tokens is
/// ignored. An inverted range like `"9-2"` is a valid empty selection, while
/// a range longer than [`MAX_RANGE_LEN`] is rejected outright.
/// Anything else (zero, text, mixed forms) is `None`, which callers treat as
/// "select everything".
pub fn parse_selection(input: &str) -> Option<Vec<IdxSize>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(n) = input.parse::<IdxSize>() {
        return (n >= 1).then(|| vec![n - 1]);
    }

    if input.contains(',') {
        let mut indices = Vec::new();
        for token in input.split(',') {
            let n: IdxSize = token.trim().parse().ok()?;
            if n < 1 {
                return None;
            }
            indices.push(n - 1);
        }
        return Some(indices);
    }

    if let Some((start, end)) = input.split_once('-') {
        let start: IdxSize = start.trim().parse().ok()?;
        let end: IdxSize = end.trim().parse().ok()?;
        if start < 1 || end < 1 {
            return None;
        }
        if end.saturating_sub(start - 1) > MAX_RANGE_LEN {
            return None;
        }
        return Some((start - 1..end).collect());
    }

    None
}
