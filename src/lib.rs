// Library Crate Root
// lib.rs

pub mod config;
pub mod engine;
pub mod models;
pub mod testing;

pub use config::{ConfigError, LedgerConfig};
pub use engine::{BucketSnapshot, LedgerError, QueryKind, TradeLedger};
pub use models::{StockRegistry, Trade, TradeRecord};
