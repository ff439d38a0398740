//! Profit/loss valuation at expiry.

use rust_decimal::Decimal;

use crate::options::{OptionLeg, PositionSide};

/// Profit/loss of one leg if the underlying settles at `price`.
///
/// Long: intrinsic value minus the mid price paid.
/// Short: mid price received minus the intrinsic value owed.
///
/// Every price is accepted, including negative ones.
#[must_use]
pub fn leg_profit_loss(leg: &OptionLeg, price: Decimal) -> Decimal {
    let intrinsic = leg.intrinsic_value(price);
    let mid = leg.mid_price();
    match leg.position {
        PositionSide::Long => intrinsic - mid,
        PositionSide::Short => mid - intrinsic,
    }
}

/// Total profit/loss of a strategy at `price`. Zero for an empty strategy.
#[must_use]
pub fn strategy_profit_loss(legs: &[OptionLeg], price: Decimal) -> Decimal {
    legs.iter().map(|leg| leg_profit_loss(leg, price)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::OptionType;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_long_call_scenario() {
        let leg = OptionLeg::long_call(dec!(100), dec!(4), dec!(6));
        assert_eq!(leg_profit_loss(&leg, dec!(100)), dec!(-5));
        assert_eq!(leg_profit_loss(&leg, dec!(110)), dec!(5));
        assert_eq!(leg_profit_loss(&leg, dec!(105)), Decimal::ZERO);
        // Below strike the loss is capped at the premium
        assert_eq!(leg_profit_loss(&leg, dec!(20)), dec!(-5));
    }

    #[test]
    fn test_short_put_scenario() {
        let leg = OptionLeg::short_put(dec!(50), dec!(1), dec!(1));
        assert_eq!(leg_profit_loss(&leg, dec!(40)), dec!(-9));
        assert_eq!(leg_profit_loss(&leg, dec!(51)), dec!(1));
        assert_eq!(leg_profit_loss(&leg, dec!(49)), Decimal::ZERO);
    }

    #[test]
    fn test_negative_price_accepted() {
        let leg = OptionLeg::long_put(dec!(10), dec!(1), dec!(1));
        assert_eq!(leg_profit_loss(&leg, dec!(-5)), dec!(14));
    }

    #[test]
    fn test_empty_strategy_is_zero() {
        assert_eq!(strategy_profit_loss(&[], dec!(123.45)), Decimal::ZERO);
        assert_eq!(strategy_profit_loss(&[], dec!(-1)), Decimal::ZERO);
    }

    #[test]
    fn test_bull_call_spread() {
        // Long 100 call @ 5, short 110 call @ 2: net debit 3, width 10
        let legs = [
            OptionLeg::long_call(dec!(100), dec!(4.5), dec!(5.5)),
            OptionLeg::short_call(dec!(110), dec!(1.5), dec!(2.5)),
        ];
        assert_eq!(strategy_profit_loss(&legs, dec!(90)), dec!(-3));
        assert_eq!(strategy_profit_loss(&legs, dec!(103)), Decimal::ZERO);
        assert_eq!(strategy_profit_loss(&legs, dec!(120)), dec!(7));
    }

    fn leg_strategy() -> impl Strategy<Value = (OptionLeg, Decimal)> {
        (
            any::<bool>(),
            any::<bool>(),
            1i64..100_000,
            0i64..5_000,
            0i64..5_000,
            -10_000i64..200_000,
        )
            .prop_map(|(is_call, is_long, strike, a, b, price)| {
                let (bid, ask) = if a <= b { (a, b) } else { (b, a) };
                let leg = OptionLeg::new(
                    if is_call { OptionType::Call } else { OptionType::Put },
                    if is_long {
                        PositionSide::Long
                    } else {
                        PositionSide::Short
                    },
                    Decimal::new(strike, 2),
                    Decimal::new(bid, 2),
                    Decimal::new(ask, 2),
                );
                (leg, Decimal::new(price, 2))
            })
    }

    proptest! {
        #[test]
        fn prop_long_and_short_are_opposites((leg, price) in leg_strategy()) {
            prop_assert_eq!(
                leg_profit_loss(&leg, price),
                -leg_profit_loss(&leg.flipped(), price)
            );
        }

        #[test]
        fn prop_long_call_break_even_is_zero(strike in 1i64..100_000, a in 0i64..5_000, b in 0i64..5_000) {
            let (bid, ask) = if a <= b { (a, b) } else { (b, a) };
            let leg = OptionLeg::long_call(
                Decimal::new(strike, 2),
                Decimal::new(bid, 2),
                Decimal::new(ask, 2),
            );
            let break_even = leg.strike_price + leg.mid_price();
            prop_assert_eq!(leg_profit_loss(&leg, break_even), Decimal::ZERO);
        }

        #[test]
        fn prop_long_call_non_decreasing_above_strike(
            strike in 1i64..100_000,
            offset in 0i64..100_000,
            delta in 0i64..100_000,
        ) {
            let leg = OptionLeg::long_call(Decimal::new(strike, 2), dec!(1), dec!(2));
            let lower = leg.strike_price + Decimal::new(offset, 2);
            let upper = lower + Decimal::new(delta, 2);
            prop_assert!(leg_profit_loss(&leg, upper) >= leg_profit_loss(&leg, lower));
        }
    }
}
