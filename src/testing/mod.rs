pub mod generator;
pub mod scenarios;

pub use generator::{GeneratorConfig, TradeGenerator};
pub use scenarios::FixtureScenario;
