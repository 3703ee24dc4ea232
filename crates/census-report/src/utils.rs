//! Shared helpers for parsing and aggregating census columns.
//!
//! Undefined results are expressed as `None` throughout instead of NaN.

use crate::types::CategoryCount;
use std::collections::HashMap;

// =============================================================================
// String Parsing Utilities
// =============================================================================

/// Tokens treated as an absent value when reading the source.
pub const MISSING_MARKERS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Check if a raw field denotes a missing value.
///
/// Matching is exact (case-sensitive) after trimming. `?` is a regular value.
///
/// # Example
///
/// ```rust,ignore
/// use census_report::utils::is_missing_marker;
///
/// assert!(is_missing_marker("  "));
/// assert!(is_missing_marker("NaN"));
/// assert!(!is_missing_marker("?"));
/// ```
pub fn is_missing_marker(s: &str) -> bool {
    let trimmed = s.trim();
    trimmed.is_empty() || MISSING_MARKERS.contains(&trimmed)
}

/// Parse a field as a number, tolerating surrounding whitespace.
///
/// Anything that does not parse, or parses to NaN, is `None`.
pub fn parse_numeric(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| !v.is_nan())
}

// =============================================================================
// Ratio and Rounding Utilities
// =============================================================================

/// `numerator / denominator`, or `None` when the denominator is zero.
#[inline]
pub fn safe_ratio(numerator: usize, denominator: usize) -> Option<f64> {
    if denominator == 0 {
        None
    } else {
        Some(numerator as f64 / denominator as f64)
    }
}

/// Share of `part` in `whole` as a percentage rounded to one decimal.
pub fn percentage(part: usize, whole: usize) -> Option<f64> {
    safe_ratio(part, whole).map(|ratio| round_half_even(ratio * 100.0, 1))
}

/// Round to `decimals` places, ties to even after scaling.
///
/// The value is scaled by `10^decimals` before rounding, so a scaled value
/// landing on `.5` is a tie: 17.05 rounds to 17.0 and 0.35 rounds to 0.4.
pub fn round_half_even(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round_ties_even() / scale
}

// =============================================================================
// Categorical Utilities
// =============================================================================

/// Most frequent value of a sequence.
///
/// Ties resolve to the lexicographically smallest value. An empty sequence
/// has no mode.
pub fn mode<'a, I>(values: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .max_by(|(a_val, a_count), (b_val, b_count)| {
            a_count.cmp(b_count).then_with(|| b_val.cmp(a_val))
        })
        .map(|(val, _)| val.to_string())
}

/// Count occurrences of each distinct value, most frequent first.
///
/// Equal counts keep the order in which the values first appeared.
pub fn value_counts<'a, I>(values: I) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<CategoryCount> = Vec::new();

    for value in values {
        match index.get(value) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(value, counts.len());
                counts.push(CategoryCount::new(value, 1));
            }
        }
    }

    // sort_by is stable
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}
