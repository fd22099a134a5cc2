pub mod bucket;
pub mod registry;
pub mod trade;

pub use bucket::{TradeBucket, ValueLevel};
pub use registry::{StockRegistry, DEFAULT_SYMBOLS};
pub use trade::{trade_value, Trade, TradeRecord};
