//! Crate-level error type.
//!
//! Payoff calculations are total and never fail. Errors only come from the
//! edges: leg construction, configuration loading, and logging setup.

use thiserror::Error;

use crate::config::ConfigError;
use crate::options::LegError;

/// Errors surfaced by the payoff engine.
#[derive(Debug, Error)]
pub enum PayoffError {
    /// A leg failed validation.
    #[error(transparent)]
    InvalidLeg(#[from] LegError),

    /// The strategy as a whole is unusable.
    #[error("Invalid strategy: {0}")]
    InvalidStrategy(String),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Logging could not be initialised.
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

impl PayoffError {
    /// Stable reason string for this error.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidLeg(_) => "INVALID_LEG",
            Self::InvalidStrategy(_) => "INVALID_STRATEGY",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Logging(_) => "LOGGING_ERROR",
        }
    }
}
