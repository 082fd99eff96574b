//! Value-level normalization functions.
//!
//! Pure functions over single cell values; the transformer applies them
//! column by column.

pub mod datetime;
pub mod location;
pub mod missing;
pub mod numeric;
pub mod rating;

pub use datetime::{nights_between, parse_stay_date};
pub use location::{neighborhood, sub_neighborhood};
pub use numeric::{parse_price, parse_review_count, parse_score};
pub use missing::{MISSING_PLACEHOLDER, is_missing};
pub use rating::normalize_rating_label;
