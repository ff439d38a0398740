//! Logging Setup
//!
//! Initializes the `tracing` subscriber from [`LoggingConfig`].
//!
//! # Configuration
//!
//! - `RUST_LOG`: overrides the configured level when set
//! - `observability.logging.format`: `json` or `pretty`
//!
//! # Usage
//!
//! ```rust,ignore
//! use payoff_engine::config::LoggingConfig;
//! use payoff_engine::telemetry::init_logging;
//!
//! init_logging(&LoggingConfig::default())?;
//! ```

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::PayoffError;

/// Build the env filter: `RUST_LOG` wins, then the configured level.
fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, PayoffError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.level).map_err(|e| PayoffError::Logging(e.to_string()))
}

/// Initialize the global tracing subscriber.
///
/// Logs go to stderr so stdout stays reserved for the JSON profile.
///
/// # Errors
///
/// Returns `PayoffError::Logging` if the level directive is invalid or a
/// global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), PayoffError> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = if config.is_json() {
        builder.json().try_init()
    } else {
        builder.pretty().try_init()
    };

    result.map_err(|e| PayoffError::Logging(e.to_string()))
}
