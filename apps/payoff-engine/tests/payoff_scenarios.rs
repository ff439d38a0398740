//! Integration tests for strategy payoff analysis.
//!
//! These tests exercise the public API end to end on single legs and an
//! iron condor.

use payoff_engine::options::{OptionLeg, OptionType, PositionSide};
use payoff_engine::payoff::{
    PayoffAnalyzer, chart_data, leg_profit_loss, max_loss, max_profit, sorted_break_even_points,
    strategy_profit_loss, strike_median, unsorted_break_even_points,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn iron_condor() -> Vec<OptionLeg> {
    vec![
        OptionLeg::long_put(dec!(140), dec!(0.40), dec!(0.60)),
        OptionLeg::short_put(dec!(145), dec!(1.40), dec!(1.60)),
        OptionLeg::short_call(dec!(155), dec!(1.30), dec!(1.50)),
        OptionLeg::long_call(dec!(160), dec!(0.30), dec!(0.50)),
    ]
}

#[test]
fn test_long_call_reference_scenario() {
    let leg = OptionLeg::long_call(dec!(100), dec!(4), dec!(6));

    assert_eq!(leg.mid_price(), dec!(5));
    assert_eq!(leg_profit_loss(&leg, dec!(100)), dec!(-5));
    assert_eq!(leg_profit_loss(&leg, dec!(110)), dec!(5));
    assert_eq!(sorted_break_even_points(&[leg]), vec![dec!(105)]);
    assert_eq!(max_loss(&[leg]), dec!(-5));
    assert_eq!(max_profit(&[leg]), dec!(95));
}

#[test]
fn test_short_put_reference_scenario() {
    let leg = OptionLeg::short_put(dec!(50), dec!(1), dec!(1));

    assert_eq!(leg.mid_price(), dec!(1));
    assert_eq!(leg_profit_loss(&leg, dec!(40)), dec!(-9));
    assert_eq!(unsorted_break_even_points(&[leg]), vec![dec!(51)]);
}

#[test]
fn test_long_and_short_mirror_each_other() {
    for option_type in [OptionType::Call, OptionType::Put] {
        let long = OptionLeg::new(option_type, PositionSide::Long, dec!(75), dec!(2), dec!(3));
        let short = OptionLeg::new(option_type, PositionSide::Short, dec!(75), dec!(2), dec!(3));

        for price in [dec!(-10), dec!(0), dec!(50), dec!(75), dec!(77.5), dec!(200)] {
            assert_eq!(
                leg_profit_loss(&long, price),
                -leg_profit_loss(&short, price),
                "{option_type} at {price}"
            );
        }
    }
}

#[test]
fn test_empty_strategy_values() {
    assert_eq!(strategy_profit_loss(&[], dec!(100)), Decimal::ZERO);
    assert_eq!(strike_median(&[]), None);
    assert!(chart_data(&[]).is_empty());
}

#[test]
fn test_strike_median_examples() {
    let three = [
        OptionLeg::long_call(dec!(90), dec!(1), dec!(1)),
        OptionLeg::long_call(dec!(100), dec!(1), dec!(1)),
        OptionLeg::long_call(dec!(110), dec!(1), dec!(1)),
    ];
    assert_eq!(strike_median(&three), Some(dec!(100)));
    assert_eq!(strike_median(&three[..2]), Some(dec!(100)));
}

#[test]
fn test_iron_condor_payoff() {
    let legs = iron_condor();
    // Credit 1.5 + 1.4 - 0.5 - 0.4 = 2.0
    assert_eq!(strategy_profit_loss(&legs, dec!(150)), dec!(2.0));
    // Max loss on either wing is width 5 - credit 2
    assert_eq!(strategy_profit_loss(&legs, dec!(130)), dec!(-3.0));
    assert_eq!(strategy_profit_loss(&legs, dec!(170)), dec!(-3.0));

    let profile = PayoffAnalyzer::default().analyze(&legs);
    assert_eq!(profile.net_premium, dec!(2.0));
    assert_eq!(
        profile.break_even_points,
        vec![dec!(139.5), dec!(146.5), dec!(153.6), dec!(160.4)]
    );
}

#[test]
fn test_iron_condor_chart() {
    let legs = iron_condor();
    let chart = chart_data(&legs);

    // Upper median of [140, 145, 155, 160] is 155: start 78, end 233, step 16
    assert_eq!(chart.prices.first(), Some(&dec!(78)));
    assert_eq!(chart.prices[1], dec!(94));
    assert!(chart.prices.last().is_some_and(|p| *p <= dec!(233)));
    assert_eq!(chart.prices.len(), chart.profits.len());

    for (price, profit) in chart.points() {
        assert_eq!(profit, strategy_profit_loss(&legs, price));
    }
}

#[test]
fn test_sorted_flag_round_trip_through_analyzer() {
    let legs = iron_condor();
    let sorted = PayoffAnalyzer::builder().sorted(true).build().analyze(&legs);
    let unsorted = PayoffAnalyzer::builder().sorted(false).build().analyze(&legs);

    assert_eq!(unsorted.break_even_points, unsorted_break_even_points(&legs));

    let mut reordered = unsorted.break_even_points.clone();
    reordered.sort();
    assert_eq!(sorted.break_even_points, reordered);
    assert_eq!(sorted.chart, unsorted.chart);
}
