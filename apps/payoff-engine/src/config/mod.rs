//! Configuration module for the payoff engine.
//!
//! Provides configuration loading, validation, and environment variable
//! interpolation for the analyzer, logging, and the strategy definition.
//!
//! # Usage
//!
//! ```rust,ignore
//! use payoff_engine::config::{Config, load_config};
//!
//! // Load from default path (payoff.yaml)
//! let config = load_config(None)?;
//!
//! // Load from custom path
//! let config = load_config(Some("strategies/straddle.yaml"))?;
//!
//! println!("legs: {}", config.strategy.legs.len());
//! ```

mod observability;
mod strategy;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::options::validate_strategy;
use crate::payoff::AnalysisConfig;

pub use observability::{LOG_FORMATS, LoggingConfig, ObservabilityConfig};
pub use strategy::StrategyConfig;

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "payoff.yaml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Analyzer configuration.
    #[serde(default)]
    pub analysis: AnalysisConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
    /// Strategy to analyse.
    #[serde(default)]
    pub strategy: StrategyConfig,
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to [`DEFAULT_CONFIG_PATH`].
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map(|m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.map_or_else(String::new, str::to_string),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let chart = &config.analysis.chart;

    if chart.range_fraction <= Decimal::ZERO {
        return Err(ConfigError::ValidationError(
            "analysis.chart.range_fraction must be positive".to_string(),
        ));
    }

    if chart.steps == 0 {
        return Err(ConfigError::ValidationError(
            "analysis.chart.steps must be positive".to_string(),
        ));
    }

    if chart.min_step < Decimal::ONE {
        return Err(ConfigError::ValidationError(
            "analysis.chart.min_step must be at least 1".to_string(),
        ));
    }

    let format = config.observability.logging.format.to_ascii_lowercase();
    if !LOG_FORMATS.contains(&format.as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.format must be one of: {LOG_FORMATS:?}"
        )));
    }

    let legs = validate_strategy(&config.strategy.legs);
    if !legs.valid {
        return Err(ConfigError::ValidationError(format!(
            "strategy.legs invalid: {}",
            legs.errors.join("; ")
        )));
    }

    Ok(())
}
