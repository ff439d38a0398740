//! Options data model.
//!
//! This module provides:
//! - Option type and position side enums
//! - The option leg record (strike, bid/ask, derived mid price)
//! - Opt-in validation for leg construction

mod leg;
mod types;
mod validation;

pub use leg::OptionLeg;
pub use types::{OptionType, PositionSide};
pub use validation::{LegError, StrategyValidationResult, validate_leg, validate_strategy};
