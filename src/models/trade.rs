use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single logged stock transaction
///
/// Trades are immutable once built. Ordering inside the ledger is driven by
/// `value()` alone, but identity is all four fields: two trades with the same
/// value and different (price, quantity) pairs are not equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    symbol: String,
    price: Decimal,
    quantity: u64,
    timestamp: DateTime<Utc>,
}

impl Trade {
    /// Create a new trade. No validation happens here, see `TradeLedger::log_transaction`
    pub fn new(symbol: String, price: Decimal, quantity: u64, timestamp: DateTime<Utc>) -> Self {
        Self {
            symbol,
            price,
            quantity,
            timestamp,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Get the trade value (price × quantity), the ledger's sort key
    ///
    /// Saturates at `Decimal::MAX`. The ledger rejects any record whose product
    /// does not fit, so trades it stores always carry their exact value.
    pub fn value(&self) -> Decimal {
        self.price.saturating_mul(Decimal::from(self.quantity))
    }
}

/// Price × quantity, or `None` if the product does not fit in a `Decimal`
pub fn trade_value(price: Decimal, quantity: i64) -> Option<Decimal> {
    price.checked_mul(Decimal::from(quantity))
}

/// An insertion request, as handed to the ledger before validation
///
/// Quantity is signed so that zero and negative input can reach validation
/// and be rejected with the offending value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub symbol: String,
    pub price: Decimal,
    pub quantity: i64,
    pub timestamp: DateTime<Utc>,
}

impl TradeRecord {
    pub fn new(
        symbol: impl Into<String>,
        price: Decimal,
        quantity: i64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            quantity,
            timestamp,
        }
    }

    /// Value this record would trade at once accepted, `None` on overflow
    pub fn value(&self) -> Option<Decimal> {
        trade_value(self.price, self.quantity)
    }
}
