//! Neighborhood extraction from the free-text location.
//!
//! Locations look like `Palermo, Buenos Aires (Palermo Soho)`: the neighborhood
//! comes first, the optional sub-neighborhood is parenthesized.

use std::sync::LazyLock;

use regex::Regex;

static PARENTHESIZED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]+)\)").expect("Invalid parenthesized group regex"));

/// Text before the first comma, trimmed. Without a comma, the whole trimmed text.
pub fn neighborhood(location: &str) -> String {
    location
        .split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

/// Text inside the first non-empty parenthesized group, or an empty string.
///
/// Nested parentheses are not handled: the group ends at the first `)`.
pub fn sub_neighborhood(location: &str) -> String {
    PARENTHESIZED_REGEX
        .captures(location)
        .and_then(|captures| captures.get(1))
        .map(|group| group.as_str().to_string())
        .unwrap_or_default()
}
