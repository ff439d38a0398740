// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Payoff Engine - Rust Core Library
//!
//! Profit/loss analysis for multi-leg options strategies at expiry.
//!
//! # Modules
//!
//! - `options`: Data model (option type, position side, legs) and leg validation
//! - `payoff`: Valuation, break-evens, max profit/loss bounds, chart sampling
//! - `config`: YAML configuration with environment interpolation
//! - `telemetry`: Logging setup
//! - `error`: Crate-level error type
//!
//! All calculations use `rust_decimal::Decimal`, take the strategy by
//! reference and have no side effects.
//!
//! # Example
//!
//! ```rust
//! use payoff_engine::options::OptionLeg;
//! use payoff_engine::payoff::{leg_profit_loss, max_profit};
//! use rust_decimal_macros::dec;
//!
//! let leg = OptionLeg::long_call(dec!(100), dec!(4), dec!(6));
//! assert_eq!(leg_profit_loss(&leg, dec!(110)), dec!(5));
//! assert_eq!(max_profit(&[leg]), dec!(95));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Configuration loading and validation.
pub mod config;

/// Crate-level errors.
pub mod error;

/// Options data model.
pub mod options;

/// Payoff calculations.
pub mod payoff;

/// Logging setup.
pub mod telemetry;

pub use error::PayoffError;
pub use options::{OptionLeg, OptionType, PositionSide};
pub use payoff::{ChartData, PayoffAnalyzer, StrategyProfile};
