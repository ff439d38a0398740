//! Option leg.
//!
//! A leg is one option contract within a strategy: type, side, strike and
//! the bid/ask quote. The mid price stands in for the premium.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{OptionType, PositionSide};
use super::validation::{LegError, validate_leg};

/// A single leg of an options strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionLeg {
    /// Option type (call/put).
    pub option_type: OptionType,
    /// Position side (long/short).
    pub position: PositionSide,
    /// Strike price.
    pub strike_price: Decimal,
    /// Bid quote.
    pub bid: Decimal,
    /// Ask quote.
    pub ask: Decimal,
}

impl OptionLeg {
    /// Create a new leg without validation.
    #[must_use]
    pub const fn new(
        option_type: OptionType,
        position: PositionSide,
        strike_price: Decimal,
        bid: Decimal,
        ask: Decimal,
    ) -> Self {
        Self {
            option_type,
            position,
            strike_price,
            bid,
            ask,
        }
    }

    /// Create a new leg, rejecting non-positive strikes and bad quotes.
    pub fn try_new(
        option_type: OptionType,
        position: PositionSide,
        strike_price: Decimal,
        bid: Decimal,
        ask: Decimal,
    ) -> Result<Self, LegError> {
        let leg = Self::new(option_type, position, strike_price, bid, ask);
        validate_leg(&leg)?;
        Ok(leg)
    }

    /// Long call.
    #[must_use]
    pub const fn long_call(strike_price: Decimal, bid: Decimal, ask: Decimal) -> Self {
        Self::new(OptionType::Call, PositionSide::Long, strike_price, bid, ask)
    }

    /// Short call.
    #[must_use]
    pub const fn short_call(strike_price: Decimal, bid: Decimal, ask: Decimal) -> Self {
        Self::new(OptionType::Call, PositionSide::Short, strike_price, bid, ask)
    }

    /// Long put.
    #[must_use]
    pub const fn long_put(strike_price: Decimal, bid: Decimal, ask: Decimal) -> Self {
        Self::new(OptionType::Put, PositionSide::Long, strike_price, bid, ask)
    }

    /// Short put.
    #[must_use]
    pub const fn short_put(strike_price: Decimal, bid: Decimal, ask: Decimal) -> Self {
        Self::new(OptionType::Put, PositionSide::Short, strike_price, bid, ask)
    }

    /// Mid price, `(bid + ask) / 2`. Used as the option's price everywhere.
    #[must_use]
    pub fn mid_price(&self) -> Decimal {
        (self.bid + self.ask) / Decimal::TWO
    }

    /// In-the-money value at `price`, ignoring time value.
    #[must_use]
    pub fn intrinsic_value(&self, price: Decimal) -> Decimal {
        let raw = match self.option_type {
            OptionType::Call => price - self.strike_price,
            OptionType::Put => self.strike_price - price,
        };
        raw.max(Decimal::ZERO)
    }

    /// Signed premium (positive = credit received, negative = debit paid).
    #[must_use]
    pub fn net_premium(&self) -> Decimal {
        -self.position.sign() * self.mid_price()
    }

    /// Same contract and quote on the other side.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self {
            position: self.position.opposite(),
            ..*self
        }
    }
}
