//! Missing-value markers written by the scraper.

/// Placeholder the scraper writes for any field it could not read.
pub const MISSING_PLACEHOLDER: &str = "N/A";

/// True for a blank cell or the exact placeholder; both mean "no value".
pub fn is_missing(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed == MISSING_PLACEHOLDER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_missing() {
        assert!(is_missing(""));
        assert!(is_missing("  "));
        assert!(is_missing("N/A"));
        assert!(is_missing(" N/A "));
        assert!(!is_missing("n/a"));
        assert!(!is_missing("0"));
        assert!(!is_missing("2026-02-16"));
    }
}
