use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Trade;

/// All trades in a bucket that share one trade value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueLevel {
    pub value: Decimal,
    pub total_quantity: u128,
    // Insertion order
    pub trades: Vec<Trade>,
}

impl ValueLevel {
    /// Create a new, empty value level
    pub fn new(value: Decimal) -> Self {
        Self {
            value,
            total_quantity: 0,
            trades: Vec::new(),
        }
    }

    /// Append a trade to the back of this level
    pub fn add_trade(&mut self, trade: Trade) {
        self.total_quantity = self
            .total_quantity
            .saturating_add(u128::from(trade.quantity()));
        self.trades.push(trade);
    }

    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }
}

/// Ordered multiset of trades for a single symbol, keyed by trade value
///
/// Traversal is non-decreasing by value. Trades sharing a value keep the
/// order they were inserted in.
#[derive(Debug, Clone, Default)]
pub struct TradeBucket {
    levels: BTreeMap<Decimal, ValueLevel>,
    len: usize,
}

impl TradeBucket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a trade at the back of its value level
    pub fn insert(&mut self, trade: Trade) {
        let value = trade.value();
        self.levels
            .entry(value)
            .or_insert_with(|| ValueLevel::new(value))
            .add_trade(trade);
        self.len += 1;
    }

    /// Number of trades in the bucket
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Every trade, ascending by value
    pub fn trades(&self) -> Vec<Trade> {
        Self::collect(self.levels.values())
    }

    /// Level holding the lowest trade value
    pub fn min_level(&self) -> Option<&ValueLevel> {
        self.levels.values().next()
    }

    /// Level holding the highest trade value
    pub fn max_level(&self) -> Option<&ValueLevel> {
        self.levels.values().next_back()
    }

    /// Level with the greatest value not above `value`
    pub fn floor_level(&self, value: Decimal) -> Option<&ValueLevel> {
        self.levels.range(..=value).next_back().map(|(_, level)| level)
    }

    /// Level with the least value not below `value`
    pub fn ceiling_level(&self, value: Decimal) -> Option<&ValueLevel> {
        self.levels.range(value..).next().map(|(_, level)| level)
    }

    /// Trades with value in `[from, to]`, ascending. Caller guarantees `from <= to`
    pub fn range(&self, from: Decimal, to: Decimal) -> Vec<Trade> {
        Self::collect(self.levels.range(from..=to).map(|(_, level)| level))
    }

    /// Sum of trade values across the bucket, `None` if it exceeds `Decimal::MAX`
    pub fn total_value(&self) -> Option<Decimal> {
        self.levels.values().try_fold(Decimal::ZERO, |total, level| {
            let subtotal = level.value.checked_mul(Decimal::from(level.len() as u64))?;
            total.checked_add(subtotal)
        })
    }

    /// Sum of quantities across the bucket
    pub fn total_quantity(&self) -> u128 {
        self.levels
            .values()
            .fold(0u128, |total, level| total.saturating_add(level.total_quantity))
    }

    fn collect<'a>(levels: impl Iterator<Item = &'a ValueLevel>) -> Vec<Trade> {
        levels.flat_map(|level| level.trades.iter().cloned()).collect()
    }
}
