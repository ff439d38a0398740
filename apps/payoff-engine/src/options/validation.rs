//! Leg validation.
//!
//! Payoff calculations accept any numeric input. These checks belong to the
//! construction layer that produces well-formed legs (strike > 0,
//! 0 <= bid <= ask) before they reach the calculators.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::leg::OptionLeg;

/// Errors from leg validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LegError {
    /// Strike must be strictly positive.
    #[error("Strike price must be positive, got {strike}")]
    NonPositiveStrike {
        /// The offending strike.
        strike: Decimal,
    },

    /// Bid and ask must be non-negative.
    #[error("Quote must be non-negative, got bid {bid} / ask {ask}")]
    NegativeQuote {
        /// Bid quote.
        bid: Decimal,
        /// Ask quote.
        ask: Decimal,
    },

    /// Bid must not exceed ask.
    #[error("Crossed quote: bid {bid} exceeds ask {ask}")]
    CrossedQuote {
        /// Bid quote.
        bid: Decimal,
        /// Ask quote.
        ask: Decimal,
    },
}

/// Validate a single leg.
pub fn validate_leg(leg: &OptionLeg) -> Result<(), LegError> {
    if leg.strike_price <= Decimal::ZERO {
        return Err(LegError::NonPositiveStrike {
            strike: leg.strike_price,
        });
    }
    if leg.bid < Decimal::ZERO || leg.ask < Decimal::ZERO {
        return Err(LegError::NegativeQuote {
            bid: leg.bid,
            ask: leg.ask,
        });
    }
    if leg.bid > leg.ask {
        return Err(LegError::CrossedQuote {
            bid: leg.bid,
            ask: leg.ask,
        });
    }
    Ok(())
}

/// Result of strategy validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyValidationResult {
    /// Whether validation passed.
    pub valid: bool,
    /// Validation errors (if any), one per failing leg.
    pub errors: Vec<String>,
}

impl StrategyValidationResult {
    /// Create a passing result.
    #[must_use]
    pub const fn success() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
        }
    }

    /// Create a failing result.
    #[must_use]
    pub const fn failure(errors: Vec<String>) -> Self {
        Self {
            valid: false,
            errors,
        }
    }
}

/// Validate every leg of a strategy.
///
/// An empty strategy is valid here; callers that need at least one leg
/// (median, chart) check for that themselves.
#[must_use]
pub fn validate_strategy(legs: &[OptionLeg]) -> StrategyValidationResult {
    let errors: Vec<String> = legs
        .iter()
        .enumerate()
        .filter_map(|(index, leg)| {
            validate_leg(leg)
                .err()
                .map(|e| format!("Leg {index}: {e}"))
        })
        .collect();

    if errors.is_empty() {
        StrategyValidationResult::success()
    } else {
        StrategyValidationResult::failure(errors)
    }
}
