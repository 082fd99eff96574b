//! Rating label cleanup.

use super::missing::MISSING_PLACEHOLDER;

/// Map the placeholder to an absent label; keep everything else verbatim.
///
/// Only an exact `N/A` is the placeholder. An empty label stays an empty
/// string.
pub fn normalize_rating_label(value: Option<&str>) -> Option<String> {
    match value {
        Some(MISSING_PLACEHOLDER) | None => None,
        Some(label) => Some(label.to_string()),
    }
}
