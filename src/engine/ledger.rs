//! Trade Ledger Engine
//!
//! This module provides the `TradeLedger` struct, the ordered trade index.
//! It keeps one bucket per registered symbol and answers sorted, min, max,
//! floor, ceiling and range queries keyed on trade value.

use parking_lot::RwLock;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info, warn};

use crate::models::{StockRegistry, Trade, TradeBucket, TradeRecord, ValueLevel};

use super::errors::{LedgerError, QueryKind};
use super::validation::{validate_query_symbol, validate_range, validate_record};

/// Aggregate view of one symbol's bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketSnapshot {
    pub symbol: String,
    pub transactions: usize,
    pub min_value: Option<Decimal>,
    pub max_value: Option<Decimal>,
    /// `None` when the sum exceeds `Decimal::MAX`
    pub total_value: Option<Decimal>,
    pub total_quantity: u128,
}

/// Thread-safe ordered trade index
///
/// The bucket map is fixed at construction since the registry is closed.
/// Each bucket has its own lock: inserts hold the write lock for the append,
/// queries hold the read lock while cloning their result out.
#[derive(Debug)]
pub struct TradeLedger {
    registry: StockRegistry,
    buckets: HashMap<String, RwLock<TradeBucket>>,
}

impl TradeLedger {
    /// Create a ledger with one empty bucket per registered symbol
    pub fn new(registry: StockRegistry) -> Self {
        let buckets = registry
            .iter()
            .map(|symbol| (symbol.to_string(), RwLock::new(TradeBucket::new())))
            .collect();

        info!("Trade ledger initialized with {} symbols", registry.len());

        Self { registry, buckets }
    }

    /// Read access to the registry this ledger was built with
    pub fn registry(&self) -> &StockRegistry {
        &self.registry
    }

    /// Registered symbols in registration order
    pub fn symbols(&self) -> &[String] {
        self.registry.symbols()
    }

    // ============================================================================
    // Insertion
    // ============================================================================

    /// Validate a record and insert it into its symbol's bucket
    ///
    /// # Errors
    /// * `InvalidStockName` if the symbol is not registered
    /// * `InvalidStockPrice` if the price is zero or negative
    /// * `InvalidStockQuantity` if the quantity is zero or negative
    /// * `TradeValueOverflow` if price × quantity does not fit in a `Decimal`
    ///
    /// Validation completes before any bucket is locked, so a rejected record
    /// leaves the ledger untouched.
    pub fn log_transaction(&self, record: TradeRecord) -> Result<(), LedgerError> {
        let quantity = match validate_record(&self.registry, &record) {
            Ok(quantity) => quantity,
            Err(e) => {
                warn!("Rejected transaction: {}", e);
                return Err(e);
            }
        };

        let bucket = self
            .buckets
            .get(&record.symbol)
            .ok_or_else(|| LedgerError::InvalidStockName(record.symbol.clone()))?;

        let trade = Trade::new(record.symbol, record.price, quantity, record.timestamp);
        debug!(
            "Logging {} x {} for {} (value {})",
            trade.quantity(),
            trade.price(),
            trade.symbol(),
            trade.value()
        );
        bucket.write().insert(trade);

        Ok(())
    }

    // ============================================================================
    // Queries
    // ============================================================================

    /// Every trade for a symbol, ascending by value
    ///
    /// Unknown symbols yield an empty vector rather than an error, unlike the
    /// other query methods.
    pub fn sorted_transactions(&self, symbol: &str) -> Vec<Trade> {
        self.buckets
            .get(symbol)
            .map(|bucket| bucket.read().trades())
            .unwrap_or_default()
    }

    /// Trades sharing the lowest value in the bucket
    pub fn min_transactions(&self, symbol: &str) -> Result<Vec<Trade>, LedgerError> {
        let bucket = self.bucket_for(QueryKind::Min, symbol)?.read();
        Ok(level_trades(bucket.min_level()))
    }

    /// Trades sharing the highest value in the bucket
    pub fn max_transactions(&self, symbol: &str) -> Result<Vec<Trade>, LedgerError> {
        let bucket = self.bucket_for(QueryKind::Max, symbol)?.read();
        Ok(level_trades(bucket.max_level()))
    }

    /// Trades sharing the greatest value that is `<= value`
    pub fn floor_transactions(
        &self,
        symbol: &str,
        value: Decimal,
    ) -> Result<Vec<Trade>, LedgerError> {
        let bucket = self.bucket_for(QueryKind::Floor, symbol)?.read();
        Ok(level_trades(bucket.floor_level(value)))
    }

    /// Trades sharing the least value that is `>= value`
    pub fn ceiling_transactions(
        &self,
        symbol: &str,
        value: Decimal,
    ) -> Result<Vec<Trade>, LedgerError> {
        let bucket = self.bucket_for(QueryKind::Ceiling, symbol)?.read();
        Ok(level_trades(bucket.ceiling_level(value)))
    }

    /// Trades with value in `[from_value, to_value]`, ascending
    ///
    /// The symbol is checked before the bounds.
    pub fn range_transactions(
        &self,
        symbol: &str,
        from_value: Decimal,
        to_value: Decimal,
    ) -> Result<Vec<Trade>, LedgerError> {
        let bucket = self.bucket_for(QueryKind::Range, symbol)?;
        validate_range(from_value, to_value)?;
        Ok(bucket.read().range(from_value, to_value))
    }

    // ============================================================================
    // Aggregates
    // ============================================================================

    /// Number of trades logged for a symbol (0 if unknown)
    pub fn transaction_count(&self, symbol: &str) -> usize {
        self.buckets
            .get(symbol)
            .map(|bucket| bucket.read().len())
            .unwrap_or(0)
    }

    /// Number of trades logged across all symbols
    pub fn total_transactions(&self) -> usize {
        self.buckets.values().map(|bucket| bucket.read().len()).sum()
    }

    /// Sum of trade values for a symbol (0 if unknown, `None` if it exceeds `Decimal::MAX`)
    pub fn total_value(&self, symbol: &str) -> Option<Decimal> {
        match self.buckets.get(symbol) {
            Some(bucket) => bucket.read().total_value(),
            None => Some(Decimal::ZERO),
        }
    }

    /// Sum of quantities for a symbol (0 if unknown)
    pub fn total_quantity(&self, symbol: &str) -> u128 {
        self.buckets
            .get(symbol)
            .map(|bucket| bucket.read().total_quantity())
            .unwrap_or(0)
    }

    /// Lowest and highest trade value for a symbol, if it has any trades
    pub fn value_range(&self, symbol: &str) -> Option<(Decimal, Decimal)> {
        let bucket = self.buckets.get(symbol)?.read();
        match (bucket.min_level(), bucket.max_level()) {
            (Some(min), Some(max)) => Some((min.value, max.value)),
            _ => None,
        }
    }

    /// Aggregate view of a symbol's bucket
    pub fn snapshot(&self, symbol: &str) -> Result<BucketSnapshot, LedgerError> {
        let bucket = self.bucket_for(QueryKind::Snapshot, symbol)?.read();
        Ok(BucketSnapshot {
            symbol: symbol.to_string(),
            transactions: bucket.len(),
            min_value: bucket.min_level().map(|level| level.value),
            max_value: bucket.max_level().map(|level| level.value),
            total_value: bucket.total_value(),
            total_quantity: bucket.total_quantity(),
        })
    }

    fn bucket_for(
        &self,
        query: QueryKind,
        symbol: &str,
    ) -> Result<&RwLock<TradeBucket>, LedgerError> {
        validate_query_symbol(&self.registry, query, symbol)?;
        self.buckets
            .get(symbol)
            .ok_or_else(|| LedgerError::UnknownQuerySymbol {
                query,
                symbol: symbol.to_string(),
            })
    }
}

impl Default for TradeLedger {
    fn default() -> Self {
        Self::new(StockRegistry::default())
    }
}

fn level_trades(level: Option<&ValueLevel>) -> Vec<Trade> {
    level.map(|level| level.trades.clone()).unwrap_or_default()
}
