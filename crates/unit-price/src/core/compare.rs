//! Unit price comparison and verdict formatting

use serde::{Deserialize, Serialize};

use super::field::Slot;
use super::format::{format_rounded, to_fixed};

/// Differences below this value show one decimal
pub const DIFF_DECIMAL_THRESHOLD: f64 = 1.0;

/// Decimals shown below [`DIFF_DECIMAL_THRESHOLD`]
pub const DIFF_DECIMALS: usize = 1;

/// Currency mark shown in verdict messages
pub const CURRENCY: &str = "¥";

/// Message shown while either unit price is undefined
pub const PROMPT_MESSAGE: &str = "Enter numbers to compare";

/// Message shown when both unit prices are equal
pub const TIE_MESSAGE: &str = "Unit prices are identical";

/// Outcome of comparing the two unit prices
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Comparison {
    /// At least one unit price is undefined
    InsufficientData,
    /// Both unit prices are equal
    Tie,
    /// One product is cheaper per unit
    Cheaper {
        /// The cheaper product
        winner: Slot,
        /// Absolute difference between the unit prices
        difference: f64,
    },
}

impl Comparison {
    /// Compares two optional unit prices
    #[must_use]
    pub fn of(a: Option<f64>, b: Option<f64>) -> Self {
        match (a, b) {
            (Some(a), Some(b)) if a < b => Self::Cheaper {
                winner: Slot::A,
                difference: b - a,
            },
            (Some(a), Some(b)) if b < a => Self::Cheaper {
                winner: Slot::B,
                difference: a - b,
            },
            (Some(_), Some(_)) => Self::Tie,
            _ => Self::InsufficientData,
        }
    }

    /// The slot to highlight, if any
    #[must_use]
    pub const fn winner(&self) -> Option<Slot> {
        match self {
            Self::Cheaper { winner, .. } => Some(*winner),
            Self::InsufficientData | Self::Tie => None,
        }
    }

    /// Returns true if the banner uses neutral styling
    #[must_use]
    pub const fn is_neutral(&self) -> bool {
        !matches!(self, Self::Cheaper { .. })
    }

    /// Human-readable verdict
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::InsufficientData => PROMPT_MESSAGE.to_string(),
            Self::Tie => TIE_MESSAGE.to_string(),
            Self::Cheaper { winner, difference } => format!(
                "{} is cheaper by {CURRENCY}{} per unit!",
                winner.label(),
                format_difference(*difference)
            ),
        }
    }
}

/// Formats a unit price difference
///
/// Below one shows a single decimal, otherwise a grouped integer.
#[must_use]
pub fn format_difference(difference: f64) -> String {
    if difference < DIFF_DECIMAL_THRESHOLD {
        to_fixed(difference, DIFF_DECIMALS)
    } else {
        format_rounded(difference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Comparison::of =====

    #[test]
    fn test_a_cheaper() {
        let cmp = Comparison::of(Some(250.0), Some(300.0));
        assert_eq!(
            cmp,
            Comparison::Cheaper {
                winner: Slot::A,
                difference: 50.0
            }
        );
        assert_eq!(cmp.winner(), Some(Slot::A));
        assert!(!cmp.is_neutral());
    }

    #[test]
    fn test_b_cheaper() {
        let cmp = Comparison::of(Some(3.0), Some(2.5));
        assert_eq!(cmp.winner(), Some(Slot::B));
        assert_eq!(cmp.message(), "B is cheaper by ¥0.5 per unit!");
    }

    #[test]
    fn test_tie() {
        let cmp = Comparison::of(Some(5.0), Some(5.0));
        assert_eq!(cmp, Comparison::Tie);
        assert_eq!(cmp.winner(), None);
        assert!(cmp.is_neutral());
        assert_eq!(cmp.message(), TIE_MESSAGE);
    }

    #[test]
    fn test_insufficient_data() {
        for (a, b) in [(None, None), (Some(1.0), None), (None, Some(1.0))] {
            let cmp = Comparison::of(a, b);
            assert_eq!(cmp, Comparison::InsufficientData);
            assert_eq!(cmp.winner(), None);
            assert!(cmp.is_neutral());
            assert_eq!(cmp.message(), PROMPT_MESSAGE);
        }
    }

    #[test]
    fn test_message_mentions_difference() {
        let cmp = Comparison::of(Some(250.0), Some(300.0));
        assert_eq!(cmp.message(), "A is cheaper by ¥50 per unit!");
    }

    // ===== format_difference =====

    #[test]
    fn test_difference_below_one_decimal() {
        assert_eq!(format_difference(0.5), "0.5");
        assert_eq!(format_difference(0.04), "0.0");
        assert_eq!(format_difference(0.25), "0.3");
    }

    #[test]
    fn test_difference_one_and_above_rounded() {
        assert_eq!(format_difference(1.0), "1");
        assert_eq!(format_difference(1.5), "2");
        assert_eq!(format_difference(50.0), "50");
        assert_eq!(format_difference(1234.4), "1,234");
    }

    #[test]
    fn test_thresholds_are_distinct() {
        // 5.5 shows decimals as a unit price but not as a difference
        assert_eq!(super::super::pricing::format_unit_price(Some(5.5)), "5.50");
        assert_eq!(format_difference(5.5), "6");
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_string(&Comparison::Tie).unwrap();
        assert_eq!(json, r#"{"outcome":"tie"}"#);
        let json = serde_json::to_string(&Comparison::of(Some(1.0), Some(3.0))).unwrap();
        assert!(json.contains(r#""winner":"a""#));
    }
}
