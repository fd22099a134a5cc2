//! Trade validation functions
//!
//! Centralized checks run on every `TradeRecord` before it reaches a bucket.
//! Checks run in a fixed order (symbol, price, quantity, value) and the
//! first failure is returned.

use rust_decimal::Decimal;

use crate::models::{trade_value, StockRegistry, TradeRecord};

use super::errors::{LedgerError, QueryKind};

// ============================================================================
// Individual Validation Functions
// ============================================================================

/// Validate that the symbol is in the registry
pub fn validate_symbol(registry: &StockRegistry, symbol: &str) -> Result<(), LedgerError> {
    if !registry.contains(symbol) {
        return Err(LedgerError::InvalidStockName(symbol.to_string()));
    }
    Ok(())
}

/// Validate that the unit price is positive
///
/// # Example
/// ```ignore
/// use rust_decimal_macros::dec;
/// assert!(validate_price(dec!(0.01)).is_ok());
/// assert!(validate_price(dec!(0)).is_err());
/// ```
pub fn validate_price(price: Decimal) -> Result<(), LedgerError> {
    if price <= Decimal::ZERO {
        return Err(LedgerError::InvalidStockPrice(price));
    }
    Ok(())
}

/// Validate that the quantity is positive, returning it unsigned
pub fn validate_quantity(quantity: i64) -> Result<u64, LedgerError> {
    if quantity <= 0 {
        return Err(LedgerError::InvalidStockQuantity(quantity));
    }
    Ok(quantity as u64)
}

/// Validate that price × quantity fits in a `Decimal`
pub fn validate_value(price: Decimal, quantity: i64) -> Result<Decimal, LedgerError> {
    trade_value(price, quantity).ok_or(LedgerError::TradeValueOverflow { price, quantity })
}

/// Validate the symbol argument of a query method
pub fn validate_query_symbol(
    registry: &StockRegistry,
    query: QueryKind,
    symbol: &str,
) -> Result<(), LedgerError> {
    if !registry.contains(symbol) {
        return Err(LedgerError::UnknownQuerySymbol {
            query,
            symbol: symbol.to_string(),
        });
    }
    Ok(())
}

/// Validate inclusive range bounds
pub fn validate_range(from_value: Decimal, to_value: Decimal) -> Result<(), LedgerError> {
    if from_value > to_value {
        return Err(LedgerError::InvalidRangeBounds {
            from_value,
            to_value,
        });
    }
    Ok(())
}

// ============================================================================
// Composite Validation Function
// ============================================================================

/// Validate a record before insertion
///
/// Single entry point used by `TradeLedger::log_transaction`. Checks run in
/// order symbol, price, quantity, value. Returns the quantity as `u64` on
/// success so the caller can build the `Trade` directly.
pub fn validate_record(registry: &StockRegistry, record: &TradeRecord) -> Result<u64, LedgerError> {
    validate_symbol(registry, &record.symbol)?;
    validate_price(record.price)?;
    let quantity = validate_quantity(record.quantity)?;
    validate_value(record.price, record.quantity)?;
    Ok(quantity)
}
