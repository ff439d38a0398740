//! Per-leg break-even estimates.
//!
//! Each leg contributes the price where its own intrinsic value equals its
//! mid price. This is a per-leg linear estimate, not a root of the combined
//! payoff, so for spreads and straddles the values are not the strategy's
//! true break-evens.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::options::{OptionLeg, OptionType, PositionSide};

/// Output order for break-even points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakEvenOrder {
    /// Ascending by price.
    #[default]
    Sorted,
    /// Same order as the input legs.
    LegOrder,
}

impl BreakEvenOrder {
    /// Order from a `sorted` flag.
    #[must_use]
    pub const fn from_sorted(sorted: bool) -> Self {
        if sorted { Self::Sorted } else { Self::LegOrder }
    }
}

/// Break-even estimate for a single leg.
///
/// | type | side  | break-even    |
/// |------|-------|---------------|
/// | Call | Long  | strike + mid  |
/// | Call | Short | strike - mid  |
/// | Put  | Long  | strike - mid  |
/// | Put  | Short | strike + mid  |
#[must_use]
pub fn leg_break_even(leg: &OptionLeg) -> Decimal {
    let mid = leg.mid_price();
    match (leg.option_type, leg.position) {
        (OptionType::Call, PositionSide::Long) | (OptionType::Put, PositionSide::Short) => {
            leg.strike_price + mid
        }
        (OptionType::Call, PositionSide::Short) | (OptionType::Put, PositionSide::Long) => {
            leg.strike_price - mid
        }
    }
}

/// One break-even per leg, duplicates kept.
#[must_use]
pub fn break_even_points(legs: &[OptionLeg], order: BreakEvenOrder) -> Vec<Decimal> {
    let mut points: Vec<Decimal> = legs.iter().map(leg_break_even).collect();
    if order == BreakEvenOrder::Sorted {
        points.sort_unstable();
    }
    points
}

/// Break-evens sorted ascending.
#[must_use]
pub fn sorted_break_even_points(legs: &[OptionLeg]) -> Vec<Decimal> {
    break_even_points(legs, BreakEvenOrder::Sorted)
}

/// Break-evens in input leg order.
#[must_use]
pub fn unsorted_break_even_points(legs: &[OptionLeg]) -> Vec<Decimal> {
    break_even_points(legs, BreakEvenOrder::LegOrder)
}
