//! Stock registry
//!
//! The closed set of symbols the ledger accepts. Built once at startup and
//! handed to `TradeLedger::new`; never modified afterwards.

use std::collections::HashSet;

use crate::config::ConfigError;

/// Listings known to the platform when no override is configured
pub const DEFAULT_SYMBOLS: [&str; 10] = [
    "Barclays",
    "HSBA",
    "Lloyds Banking Group",
    "NatWest Group",
    "Standard Chartered",
    "3i",
    "Abrdn",
    "Hargreaves Lansdown",
    "London Stock Exchange Group",
    "Schroders",
];

/// Immutable set of recognised stock symbols
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockRegistry {
    // Registration order, used for iteration
    symbols: Vec<String>,
    lookup: HashSet<String>,
}

impl StockRegistry {
    /// Build a registry from a list of symbols
    ///
    /// # Errors
    /// * `ConfigError::EmptyRegistry` if no symbols are given
    /// * `ConfigError::BlankSymbol` if a symbol is empty or whitespace
    /// * `ConfigError::DuplicateSymbol` if a symbol appears twice
    pub fn new<I, S>(symbols: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ordered = Vec::new();
        let mut lookup = HashSet::new();

        for symbol in symbols {
            let symbol = symbol.into();
            if symbol.trim().is_empty() {
                return Err(ConfigError::BlankSymbol);
            }
            if !lookup.insert(symbol.clone()) {
                return Err(ConfigError::DuplicateSymbol(symbol));
            }
            ordered.push(symbol);
        }

        if ordered.is_empty() {
            return Err(ConfigError::EmptyRegistry);
        }

        Ok(Self {
            symbols: ordered,
            lookup,
        })
    }

    /// Check whether a symbol is registered
    pub fn contains(&self, symbol: &str) -> bool {
        self.lookup.contains(symbol)
    }

    /// Registered symbols in registration order
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Default for StockRegistry {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect(),
            lookup: DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry() {
        let registry = StockRegistry::default();

        assert_eq!(registry.len(), DEFAULT_SYMBOLS.len());
        assert!(registry.contains("HSBA"));
        assert!(registry.contains("London Stock Exchange Group"));
        assert!(!registry.contains("UCL Bank"));
        assert_eq!(registry.symbols()[0], "Barclays");
    }

    #[test]
    fn test_custom_registry_keeps_order() {
        let registry = StockRegistry::new(["VOD", "BP", "AZN"]).unwrap();

        let symbols: Vec<&str> = registry.iter().collect();
        assert_eq!(symbols, vec!["VOD", "BP", "AZN"]);
        assert!(!registry.contains("HSBA"));
    }

    #[test]
    fn test_registry_rejects_bad_input() {
        assert!(matches!(
            StockRegistry::new(Vec::<String>::new()),
            Err(ConfigError::EmptyRegistry)
        ));
        assert!(matches!(
            StockRegistry::new(["HSBA", "  "]),
            Err(ConfigError::BlankSymbol)
        ));
        assert!(matches!(
            StockRegistry::new(["HSBA", "HSBA"]),
            Err(ConfigError::DuplicateSymbol(s)) if s == "HSBA"
        ));
    }
}
