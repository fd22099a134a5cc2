//! Error types for ledger operations
//!
//! Every failure the ledger reports is an invalid-argument condition raised
//! before any bucket is touched. The `Display` output of each variant is the
//! exact message callers match on, so keep the wording stable.

use rust_decimal::Decimal;
use std::fmt;
use thiserror::Error;

/// Query method that rejected its input
///
/// Displays as the method name used to prefix query error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Min,
    Max,
    Floor,
    Ceiling,
    Range,
    Snapshot,
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QueryKind::Min => "minTransactions",
            QueryKind::Max => "maxTransactions",
            QueryKind::Floor => "floorTransactions",
            QueryKind::Ceiling => "ceilingTransactions",
            QueryKind::Range => "rangeTransactions",
            QueryKind::Snapshot => "snapshot",
        };
        f.write_str(name)
    }
}

/// Errors that can occur during ledger operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Insert for a symbol outside the registry
    #[error("Invalid Stock Name: {0}")]
    InvalidStockName(String),

    /// Insert with a zero or negative unit price
    #[error("Invalid Stock Price: {0}")]
    InvalidStockPrice(Decimal),

    /// Insert with a zero or negative quantity
    #[error("Invalid Stock Quantity: {0}")]
    InvalidStockQuantity(i64),

    /// Insert whose price × quantity does not fit in a `Decimal`
    #[error("Invalid Trade Value: price: {price} quantity: {quantity}")]
    TradeValueOverflow { price: Decimal, quantity: i64 },

    /// Query for a symbol outside the registry
    #[error("{query}: Invalid Stock Name: {symbol}")]
    UnknownQuerySymbol { query: QueryKind, symbol: String },

    /// Range query whose lower bound exceeds its upper bound
    #[error("rangeTransactions: Invalid Range Bounds: fromValue: {from_value} toValue: {to_value}")]
    InvalidRangeBounds {
        from_value: Decimal,
        to_value: Decimal,
    },
}

impl LedgerError {
    /// Returns true if the error names an unregistered symbol
    pub fn is_unknown_symbol(&self) -> bool {
        matches!(
            self,
            LedgerError::InvalidStockName(_) | LedgerError::UnknownQuerySymbol { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_insert_error_display() {
        assert_eq!(
            LedgerError::InvalidStockName("UCL Bank".to_string()).to_string(),
            "Invalid Stock Name: UCL Bank"
        );
        assert_eq!(
            LedgerError::InvalidStockPrice(dec!(0)).to_string(),
            "Invalid Stock Price: 0"
        );
        assert_eq!(
            LedgerError::InvalidStockQuantity(-3).to_string(),
            "Invalid Stock Quantity: -3"
        );
        assert_eq!(
            LedgerError::TradeValueOverflow {
                price: dec!(100000000000000000000),
                quantity: 1_000_000_000
            }
            .to_string(),
            "Invalid Trade Value: price: 100000000000000000000 quantity: 1000000000"
        );
    }

    #[test]
    fn test_query_error_display() {
        let err = LedgerError::UnknownQuerySymbol {
            query: QueryKind::Ceiling,
            symbol: "UCL Bank".to_string(),
        };
        assert_eq!(err.to_string(), "ceilingTransactions: Invalid Stock Name: UCL Bank");

        let err = LedgerError::InvalidRangeBounds {
            from_value: dec!(101),
            to_value: dec!(99),
        };
        assert_eq!(
            err.to_string(),
            "rangeTransactions: Invalid Range Bounds: fromValue: 101 toValue: 99"
        );
    }

    #[test]
    fn test_error_categories() {
        assert!(LedgerError::InvalidStockName("X".to_string()).is_unknown_symbol());
        assert!(!LedgerError::InvalidStockQuantity(0).is_unknown_symbol());
        assert!(!LedgerError::TradeValueOverflow {
            price: Decimal::MAX,
            quantity: 2
        }
        .is_unknown_symbol());
    }
}
