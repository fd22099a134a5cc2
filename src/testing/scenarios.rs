use crate::testing::generator::GeneratorConfig;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Pre-defined fixture scenarios with specialized configurations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixtureScenario {
    /// Modest values, a handful of trades per symbol
    Small,
    /// Values spread over six orders of magnitude
    Wide,
    /// Half of every bucket pinned to a single value
    Conflicting,
}

impl FixtureScenario {
    /// Convert scenario to generator configuration
    pub fn to_config(self, trades_per_symbol: usize) -> GeneratorConfig {
        match self {
            FixtureScenario::Small => GeneratorConfig {
                min_value: 100,
                max_value: 10_000,
                trades_per_symbol,
                ..GeneratorConfig::default()
            },

            FixtureScenario::Wide => GeneratorConfig {
                min_value: 1,
                max_value: 1_000_000,
                max_quantity: 1_000,
                trades_per_symbol,
                ..GeneratorConfig::default()
            },

            FixtureScenario::Conflicting => GeneratorConfig {
                min_value: 1_000,
                max_value: 100_000,
                trades_per_symbol,
                conflict_value: Some(550),
                conflict_percentage: 50,
                ..GeneratorConfig::default()
            },
        }
    }

    /// Get scenario description
    pub fn description(&self) -> &'static str {
        match self {
            FixtureScenario::Small => "Trade values between 100 and 10,000",
            FixtureScenario::Wide => "Trade values between 1 and 1,000,000",
            FixtureScenario::Conflicting => "Half of each bucket shares the value 550",
        }
    }
}

impl FromStr for FixtureScenario {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(FixtureScenario::Small),
            "wide" => Ok(FixtureScenario::Wide),
            "conflicting" => Ok(FixtureScenario::Conflicting),
            other => Err(format!("unknown fixture scenario: {}", other)),
        }
    }
}
