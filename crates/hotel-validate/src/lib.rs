//! Data-quality classification of enriched hotel offers.
//!
//! A row is valid when its final price and its length of stay are both
//! positive and its score, if present, lies within `[0, 10]`. Every other row
//! is invalid; classification never drops a row.

mod error;
pub mod mask;
pub mod rules;

pub use error::{Result, ValidateError};
pub use mask::{SplitFrames, ValidityMask, split_by_validity, validity_mask};
pub use rules::{MAX_SCORE, MIN_SCORE, RejectionRule, RowVerdict, evaluate_row};
