//! Ledger configuration
//!
//! Values come from the environment (a `.env` file is loaded first by the
//! binary). Anything unset falls back to its default.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{StockRegistry, DEFAULT_SYMBOLS};
use crate::testing::FixtureScenario;

/// Errors raised while building configuration or the registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Stock registry must contain at least one symbol")]
    EmptyRegistry,

    #[error("Stock registry contains a blank symbol")]
    BlankSymbol,

    #[error("Duplicate stock symbol: {0}")]
    DuplicateSymbol(String),

    /// An environment variable held a value that could not be parsed
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Runtime configuration for the ledger binary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Symbols accepted by the ledger
    #[serde(default = "default_symbols")]
    pub symbols: Vec<String>,

    /// Fixture scenario used to seed the ledger
    #[serde(default = "default_scenario")]
    pub scenario: FixtureScenario,

    /// RNG seed for fixture generation
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Generated trades per registered symbol
    #[serde(default = "default_trades_per_symbol")]
    pub trades_per_symbol: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            symbols: default_symbols(),
            scenario: default_scenario(),
            seed: default_seed(),
            trades_per_symbol: default_trades_per_symbol(),
        }
    }
}

impl LedgerConfig {
    /// Load configuration from process environment variables
    ///
    /// - `LEDGER_SYMBOLS` - comma-separated symbol list
    /// - `LEDGER_SCENARIO` - `small`, `wide` or `conflicting`
    /// - `LEDGER_SEED` - fixture RNG seed
    /// - `LEDGER_TRADES_PER_SYMBOL` - fixture size
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("LEDGER_SYMBOLS") {
            config.symbols = raw.split(',').map(|s| s.trim().to_string()).collect();
        }

        if let Some(raw) = lookup("LEDGER_SCENARIO") {
            config.scenario = raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "LEDGER_SCENARIO",
                value: raw.clone(),
            })?;
        }

        if let Some(raw) = lookup("LEDGER_SEED") {
            config.seed = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "LEDGER_SEED",
                value: raw.clone(),
            })?;
        }

        if let Some(raw) = lookup("LEDGER_TRADES_PER_SYMBOL") {
            config.trades_per_symbol =
                raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                    key: "LEDGER_TRADES_PER_SYMBOL",
                    value: raw.clone(),
                })?;
        }

        Ok(config)
    }

    /// Build the immutable registry described by this configuration
    pub fn registry(&self) -> Result<StockRegistry, ConfigError> {
        StockRegistry::new(self.symbols.iter().cloned())
    }
}

fn default_symbols() -> Vec<String> {
    DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect()
}

fn default_scenario() -> FixtureScenario {
    FixtureScenario::Small
}

fn default_seed() -> u64 {
    42
}

fn default_trades_per_symbol() -> usize {
    25
}
