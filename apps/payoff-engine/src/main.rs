//! Payoff Engine Binary
//!
//! Loads a strategy from YAML, analyses it and prints the profile as JSON.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin payoff-engine -- strategies/straddle.yaml
//! ```
//!
//! # Environment Variables
//!
//! - `PAYOFF_CONFIG`: Config path when no argument is given (default: `payoff.yaml`)
//! - `RUST_LOG`: Log level (overrides `observability.logging.level`)

use anyhow::Context;
use payoff_engine::PayoffError;
use payoff_engine::config::{Config, DEFAULT_CONFIG_PATH, load_config};
use payoff_engine::payoff::PayoffAnalyzer;
use payoff_engine::telemetry::init_logging;

fn main() -> anyhow::Result<()> {
    let path = config_path();
    let config = load_config(Some(path.as_str())).with_context(|| format!("loading {path}"))?;
    init_logging(&config.observability.logging)?;

    tracing::info!(
        config = %path,
        strategy = config.strategy.name.as_deref().unwrap_or("unnamed"),
        legs = config.strategy.legs.len(),
        "Starting payoff analysis"
    );

    let json = run(&config)?;
    println!("{json}");

    tracing::info!("Payoff analysis complete");
    Ok(())
}

/// Resolve the config path: first CLI argument, then `PAYOFF_CONFIG`, then default.
fn config_path() -> String {
    std::env::args()
        .nth(1)
        .or_else(|| std::env::var("PAYOFF_CONFIG").ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
}

/// Analyse the configured strategy and render the profile.
fn run(config: &Config) -> anyhow::Result<String> {
    if config.strategy.legs.is_empty() {
        return Err(PayoffError::InvalidStrategy(
            "strategy.legs must contain at least one leg".to_string(),
        )
        .into());
    }

    let analyzer = PayoffAnalyzer::from_config(&config.analysis);
    let profile = analyzer.analyze(&config.strategy.legs);
    serde_json::to_string_pretty(&profile).context("serializing strategy profile")
}
