//! Approximate max profit / max loss.
//!
//! Both bounds fold over the legs starting from zero and look at each leg in
//! isolation, using the strike as the reference for "maximum intrinsic
//! value". Results are never worse than zero in their own direction and are
//! not a scan of the payoff over the full price domain.

use rust_decimal::Decimal;

use crate::options::{OptionLeg, OptionType, PositionSide};

/// Best single-leg profit, floored at zero.
///
/// Per leg the reference is the strike for calls and zero for puts; a long
/// leg scores `reference - mid`, a short leg `mid - reference`.
#[must_use]
pub fn max_profit(legs: &[OptionLeg]) -> Decimal {
    legs.iter().fold(Decimal::ZERO, |acc, leg| {
        let reference = match leg.option_type {
            OptionType::Call => leg.strike_price,
            OptionType::Put => Decimal::ZERO,
        };
        let mid = leg.mid_price();
        let candidate = match leg.position {
            PositionSide::Long => reference - mid,
            PositionSide::Short => mid - reference,
        };
        acc.max(candidate)
    })
}

/// Worst single-leg loss, capped at zero.
///
/// Per leg the reference is the strike for puts and zero for calls; a long
/// leg scores `reference - mid`, a short leg `mid - reference`, so a long
/// call reports its premium as the loss.
#[must_use]
pub fn max_loss(legs: &[OptionLeg]) -> Decimal {
    legs.iter().fold(Decimal::ZERO, |acc, leg| {
        let reference = match leg.option_type {
            OptionType::Put => leg.strike_price,
            OptionType::Call => Decimal::ZERO,
        };
        let mid = leg.mid_price();
        let candidate = match leg.position {
            PositionSide::Long => reference - mid,
            PositionSide::Short => mid - reference,
        };
        acc.min(candidate)
    })
}
