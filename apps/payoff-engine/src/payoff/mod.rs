//! Strategy payoff calculations.
//!
//! This module provides:
//! - Valuation: per-leg and strategy profit/loss at an underlying price
//! - Break-even finder: per-leg break-even estimates (sorted or leg order)
//! - Bounds estimator: approximate max profit and max loss
//! - Curve sampler: strike median and the (price, profit) chart
//! - `PayoffAnalyzer`: all of the above behind one configurable component
//!
//! Every function is pure: inputs are borrowed and never mutated.

mod analyzer;
mod bounds;
mod breakeven;
mod chart;
mod valuation;

pub use analyzer::{AnalysisConfig, PayoffAnalyzer, PayoffAnalyzerBuilder, StrategyProfile};
pub use bounds::{max_loss, max_profit};
pub use breakeven::{
    BreakEvenOrder, break_even_points, leg_break_even, sorted_break_even_points,
    unsorted_break_even_points,
};
pub use chart::{ChartConfig, ChartData, chart_data, chart_data_with, strike_median};
pub use valuation::{leg_profit_loss, strategy_profit_loss};
