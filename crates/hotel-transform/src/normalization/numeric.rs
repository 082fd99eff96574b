//! Numeric conversion for price, score and review count fields.
//!
//! The three fields follow different policies on unparsable input:
//! prices abort the batch, scores become absent, review counts become zero.

use hotel_common::{parse_f64, parse_i64};

use super::missing::is_missing;

/// Parse a price value to `f64`.
///
/// Blank input and the `N/A` placeholder are `Ok(None)` (a missing price).
/// Text that is not a number is returned as the error so the caller can
/// report it.
pub fn parse_price(value: &str) -> Result<Option<f64>, &str> {
    if is_missing(value) {
        return Ok(None);
    }
    parse_f64(value).map(Some).ok_or(value)
}

/// Parse a review score.
///
/// Anything that is not a number (including the `N/A` placeholder) yields
/// `None`. A literal `NaN` is treated as absent as well, so an absent score is
/// always a null and never a NaN.
pub fn parse_score(value: Option<&str>) -> Option<f64> {
    value.and_then(parse_f64).filter(|score| !score.is_nan())
}

/// Parse a review count.
///
/// Unparsable or missing input counts as zero reviews. Decimal renderings
/// (`"120.0"`) are accepted and truncated.
pub fn parse_review_count(value: Option<&str>) -> i64 {
    let Some(value) = value else {
        return 0;
    };
    if let Some(count) = parse_i64(value) {
        return count;
    }
    match parse_f64(value) {
        Some(count) if count.is_finite() => count.trunc() as i64,
        _ => 0,
    }
}
