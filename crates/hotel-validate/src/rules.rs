//! Row-level rejection rules.

use serde::{Deserialize, Serialize};

/// Lowest accepted review score (inclusive).
pub const MIN_SCORE: f64 = 0.0;
/// Highest accepted review score (inclusive).
pub const MAX_SCORE: f64 = 10.0;

/// A reason for routing a row to the invalid set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RejectionRule {
    /// Final price is absent or not greater than zero.
    NonPositivePrice,
    /// Length of stay is absent or not greater than zero.
    NonPositiveNights,
    /// Score is present but outside `[0, 10]`.
    ScoreOutOfRange,
}

impl RejectionRule {
    /// Every rule, in evaluation order.
    pub const fn all() -> &'static [Self] {
        &[
            Self::NonPositivePrice,
            Self::NonPositiveNights,
            Self::ScoreOutOfRange,
        ]
    }

    /// Short label for reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NonPositivePrice => "Non-positive price",
            Self::NonPositiveNights => "Non-positive nights",
            Self::ScoreOutOfRange => "Score out of range",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::NonPositivePrice => "Final price is missing or not greater than zero",
            Self::NonPositiveNights => "Check-out is missing or not after check-in",
            Self::ScoreOutOfRange => "Review score is outside 0 to 10",
        }
    }

    fn violated_by(self, final_price: Option<f64>, nights: Option<i64>, score: Option<f64>) -> bool {
        match self {
            // NaN compares false and is rejected with null.
            Self::NonPositivePrice => !final_price.is_some_and(|price| price > 0.0),
            Self::NonPositiveNights => !nights.is_some_and(|nights| nights > 0),
            Self::ScoreOutOfRange => {
                score.is_some_and(|score| !(MIN_SCORE..=MAX_SCORE).contains(&score))
            }
        }
    }
}

/// Outcome of evaluating one row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowVerdict {
    /// Violated rules, in evaluation order. Empty for a valid row.
    pub violations: Vec<RejectionRule>,
}

impl RowVerdict {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violates(&self, rule: RejectionRule) -> bool {
        self.violations.contains(&rule)
    }
}

/// Evaluate every rule against one row's predicate fields.
///
/// An absent score is accepted; absent price or nights are not.
pub fn evaluate_row(final_price: Option<f64>, nights: Option<i64>, score: Option<f64>) -> RowVerdict {
    RowVerdict {
        violations: RejectionRule::all()
            .iter()
            .copied()
            .filter(|rule| rule.violated_by(final_price, nights, score))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_row() {
        assert!(evaluate_row(Some(267325.0), Some(2), None).is_valid());
        assert!(evaluate_row(Some(0.01), Some(1), Some(8.5)).is_valid());
    }

    #[test]
    fn test_score_bounds_are_inclusive() {
        assert!(evaluate_row(Some(100.0), Some(1), Some(0.0)).is_valid());
        assert!(evaluate_row(Some(100.0), Some(1), Some(10.0)).is_valid());

        let below = evaluate_row(Some(100.0), Some(1), Some(-0.001));
        assert_eq!(below.violations, vec![RejectionRule::ScoreOutOfRange]);
        let above = evaluate_row(Some(100.0), Some(1), Some(10.001));
        assert_eq!(above.violations, vec![RejectionRule::ScoreOutOfRange]);
    }

    #[test]
    fn test_price_bound_is_strict() {
        for price in [0.0, -1.0, f64::NAN] {
            let verdict = evaluate_row(Some(price), Some(2), None);
            assert!(verdict.violates(RejectionRule::NonPositivePrice), "{price}");
        }
        assert!(evaluate_row(None, Some(2), None).violates(RejectionRule::NonPositivePrice));
    }

    #[test]
    fn test_nights_bound_is_strict() {
        assert!(evaluate_row(Some(1.0), Some(0), None).violates(RejectionRule::NonPositiveNights));
        assert!(evaluate_row(Some(1.0), Some(-2), None).violates(RejectionRule::NonPositiveNights));
        assert!(evaluate_row(Some(1.0), None, None).violates(RejectionRule::NonPositiveNights));
    }

    #[test]
    fn test_multiple_violations() {
        let verdict = evaluate_row(Some(-5.0), Some(0), Some(11.0));
        assert_eq!(verdict.violations, RejectionRule::all().to_vec());
    }

    #[test]
    fn test_labels() {
        for rule in RejectionRule::all() {
            assert!(!rule.label().is_empty());
            assert!(!rule.description().is_empty());
        }
    }
}
