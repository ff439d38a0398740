//! Price/profit curve sampling for charting.
//!
//! The sampled window is centred on the strike median: it starts at
//! `round(median * range_fraction)`, ends at `round(median + start)` and is
//! split into `steps` rounded increments. Every sample is valued with
//! [`strategy_profit_loss`], so `profits[i]` is always the profit at
//! `prices[i]`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::options::OptionLeg;

use super::valuation::strategy_profit_loss;

/// Curve sampling configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Fraction of the strike median used for the window start.
    #[serde(default = "default_range_fraction")]
    pub range_fraction: Decimal,
    /// Number of increments between start and end.
    #[serde(default = "default_steps")]
    pub steps: u32,
    /// Step used when the rounded step collapses to zero or below.
    #[serde(default = "default_min_step")]
    pub min_step: Decimal,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            range_fraction: default_range_fraction(),
            steps: default_steps(),
            min_step: default_min_step(),
        }
    }
}

fn default_range_fraction() -> Decimal {
    dec!(0.5)
}

const fn default_steps() -> u32 {
    10
}

const fn default_min_step() -> Decimal {
    Decimal::ONE
}

/// Sampled (price, profit) curve.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartData {
    /// Underlying prices, ascending.
    pub prices: Vec<Decimal>,
    /// Strategy profit/loss at the matching price.
    pub profits: Vec<Decimal>,
}

impl ChartData {
    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Whether the curve has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Iterate `(price, profit)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (Decimal, Decimal)> + '_ {
        self.prices.iter().copied().zip(self.profits.iter().copied())
    }

    fn push(&mut self, price: Decimal, profit: Decimal) {
        self.prices.push(price);
        self.profits.push(profit);
    }
}

/// Round half up toward positive infinity, `floor(x + 0.5)`.
///
/// `None` when `value + 0.5` overflows.
fn round_half_up(value: Decimal) -> Option<Decimal> {
    value.checked_add(dec!(0.5)).map(|v| v.floor())
}

/// Strike at index `n / 2` of the ascending strikes.
///
/// Upper median for even counts. `None` for an empty strategy.
#[must_use]
pub fn strike_median(legs: &[OptionLeg]) -> Option<Decimal> {
    let mut strikes: Vec<Decimal> = legs.iter().map(|leg| leg.strike_price).collect();
    strikes.sort_unstable();
    strikes.get(strikes.len() / 2).copied()
}

/// Sample the strategy curve with the default policy (`0.5` range, `10` steps).
#[must_use]
pub fn chart_data(legs: &[OptionLeg]) -> ChartData {
    chart_data_with(legs, &ChartConfig::default())
}

/// Sample the strategy curve with an explicit configuration.
///
/// An empty strategy yields an empty curve, as does a window whose bounds
/// overflow `Decimal`. A rounded step of zero or below is replaced by
/// `min_step`, and the fallback walk is capped at `steps + 1` samples; a
/// non-positive `min_step` yields at most one sample. `steps == 0` is treated
/// as a single increment.
#[must_use]
pub fn chart_data_with(legs: &[OptionLeg], config: &ChartConfig) -> ChartData {
    let mut chart = ChartData::default();
    let Some(median) = strike_median(legs) else {
        return chart;
    };

    let steps = config.steps.max(1);
    let Some((start, end, raw_step)) = sampling_window(median, config.range_fraction, steps)
    else {
        tracing::warn!(%median, "Chart window overflows, returning empty curve");
        return chart;
    };

    let mut step = raw_step;
    let mut max_samples = None;
    if step <= Decimal::ZERO {
        tracing::warn!(
            %median,
            %start,
            %end,
            %step,
            min_step = %config.min_step,
            "Degenerate chart step, falling back to minimum step"
        );
        step = config.min_step;
        max_samples = Some(steps as usize + 1);
    }

    if step <= Decimal::ZERO {
        if start <= end {
            chart.push(start, strategy_profit_loss(legs, start));
        }
        return chart;
    }

    let mut price = start;
    while price <= end && max_samples.is_none_or(|max| chart.len() < max) {
        chart.push(price, strategy_profit_loss(legs, price));
        let Some(next) = price.checked_add(step) else {
            break;
        };
        price = next;
    }

    tracing::trace!(samples = chart.len(), %start, %end, %step, "Sampled payoff curve");
    chart
}

/// Rounded `(start, end, step)` for a median, or `None` on overflow.
fn sampling_window(
    median: Decimal,
    range_fraction: Decimal,
    steps: u32,
) -> Option<(Decimal, Decimal, Decimal)> {
    let start = round_half_up(median.checked_mul(range_fraction)?)?;
    let end = round_half_up(median.checked_add(start)?)?;
    let span = end.checked_sub(start)?;
    let step = round_half_up(span.checked_div(Decimal::from(steps))?)?;
    Some((start, end, step))
}
