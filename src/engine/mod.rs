//! Trade Ledger Engine Module
//!
//! This module contains the core ledger functionality:
//! - `errors` - Error types for ledger operations
//! - `validation` - Record and query argument validation
//! - `ledger` - The per-symbol ordered trade index

pub mod errors;
pub mod ledger;
pub mod validation;

// Re-export commonly used types for convenience
pub use errors::{LedgerError, QueryKind};
pub use ledger::{BucketSnapshot, TradeLedger};
pub use validation::validate_record;
