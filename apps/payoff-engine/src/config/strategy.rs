//! Strategy definition loaded from configuration.

use serde::{Deserialize, Serialize};

use crate::options::OptionLeg;

/// Strategy legs to analyse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StrategyConfig {
    /// Display name (e.g., `"bull_call_spread"`).
    #[serde(default)]
    pub name: Option<String>,
    /// Strategy legs.
    #[serde(default)]
    pub legs: Vec<OptionLeg>,
}
