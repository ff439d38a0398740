//! Strategy profile analyzer.
//!
//! Bundles valuation, break-evens, bounds and the chart into a single
//! [`StrategyProfile`]. Break-even output order is the only behavioural
//! switch and is set through [`PayoffAnalyzerBuilder::sorted`].
//!
//! # Example
//!
//! ```rust
//! use payoff_engine::options::OptionLeg;
//! use payoff_engine::payoff::PayoffAnalyzer;
//! use rust_decimal_macros::dec;
//!
//! let analyzer = PayoffAnalyzer::builder().sorted(false).build();
//! let profile = analyzer.analyze(&[OptionLeg::long_call(dec!(100), dec!(4), dec!(6))]);
//!
//! assert_eq!(profile.break_even_points, vec![dec!(105)]);
//! assert_eq!(profile.max_loss, dec!(-5));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::options::OptionLeg;

use super::breakeven::{BreakEvenOrder, break_even_points};
use super::bounds::{max_loss, max_profit};
use super::chart::{ChartConfig, ChartData, chart_data_with};
use super::valuation::strategy_profit_loss;

/// Analysis options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Sort break-even points ascending.
    #[serde(default = "default_sorted_break_evens")]
    pub sorted_break_evens: bool,
    /// Chart sampling configuration.
    #[serde(default)]
    pub chart: ChartConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sorted_break_evens: default_sorted_break_evens(),
            chart: ChartConfig::default(),
        }
    }
}

const fn default_sorted_break_evens() -> bool {
    true
}

/// Payoff summary of a strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyProfile {
    /// Number of legs analysed.
    pub leg_count: usize,
    /// Net premium (positive = credit, negative = debit).
    pub net_premium: Decimal,
    /// Per-leg break-even estimates.
    pub break_even_points: Vec<Decimal>,
    /// Approximate maximum profit (never below zero).
    pub max_profit: Decimal,
    /// Approximate maximum loss (never above zero).
    pub max_loss: Decimal,
    /// Sampled curve, absent for an empty strategy.
    pub chart: Option<ChartData>,
}

/// Payoff analyzer.
#[derive(Debug, Clone, Default)]
pub struct PayoffAnalyzer {
    order: BreakEvenOrder,
    chart: ChartConfig,
}

impl PayoffAnalyzer {
    /// Start building an analyzer.
    #[must_use]
    pub fn builder() -> PayoffAnalyzerBuilder {
        PayoffAnalyzerBuilder::default()
    }

    /// Analyzer configured from [`AnalysisConfig`].
    #[must_use]
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::builder()
            .sorted(config.sorted_break_evens)
            .chart(config.chart.clone())
            .build()
    }

    /// Break-even order in use.
    #[must_use]
    pub const fn break_even_order(&self) -> BreakEvenOrder {
        self.order
    }

    /// Chart configuration in use.
    #[must_use]
    pub const fn chart_config(&self) -> &ChartConfig {
        &self.chart
    }

    /// Profit/loss of the strategy at `price`.
    #[must_use]
    pub fn profit_loss(&self, legs: &[OptionLeg], price: Decimal) -> Decimal {
        strategy_profit_loss(legs, price)
    }

    /// Break-even points in the configured order.
    #[must_use]
    pub fn break_even_points(&self, legs: &[OptionLeg]) -> Vec<Decimal> {
        break_even_points(legs, self.order)
    }

    /// Chart sampled with the configured policy.
    #[must_use]
    pub fn chart_data(&self, legs: &[OptionLeg]) -> ChartData {
        chart_data_with(legs, &self.chart)
    }

    /// Full payoff profile.
    #[must_use]
    pub fn analyze(&self, legs: &[OptionLeg]) -> StrategyProfile {
        let chart = if legs.is_empty() {
            None
        } else {
            Some(self.chart_data(legs))
        };

        let profile = StrategyProfile {
            leg_count: legs.len(),
            net_premium: legs.iter().map(OptionLeg::net_premium).sum(),
            break_even_points: self.break_even_points(legs),
            max_profit: max_profit(legs),
            max_loss: max_loss(legs),
            chart,
        };

        tracing::debug!(
            legs = profile.leg_count,
            net_premium = %profile.net_premium,
            max_profit = %profile.max_profit,
            max_loss = %profile.max_loss,
            break_evens = ?profile.break_even_points,
            "Analyzed strategy payoff"
        );

        profile
    }
}

/// Builder for [`PayoffAnalyzer`].
#[derive(Debug, Clone, Default)]
pub struct PayoffAnalyzerBuilder {
    order: BreakEvenOrder,
    chart: ChartConfig,
}

impl PayoffAnalyzerBuilder {
    /// Sort break-even points ascending (`true`, default) or keep leg order.
    #[must_use]
    pub const fn sorted(mut self, sorted: bool) -> Self {
        self.order = BreakEvenOrder::from_sorted(sorted);
        self
    }

    /// Chart sampling configuration.
    #[must_use]
    pub fn chart(mut self, chart: ChartConfig) -> Self {
        self.chart = chart;
        self
    }

    /// Build the analyzer.
    #[must_use]
    pub fn build(self) -> PayoffAnalyzer {
        PayoffAnalyzer {
            order: self.order,
            chart: self.chart,
        }
    }
}
