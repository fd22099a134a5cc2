use chrono::{DateTime, Utc};
use rand::prelude::*;
use rand::rngs::StdRng;
use rust_decimal::Decimal;
use tracing::info;

use crate::engine::{LedgerError, TradeLedger};
use crate::models::{StockRegistry, TradeRecord};

// 2022-01-01T00:00:00Z
const YEAR_START: i64 = 1_640_995_200;
const SECONDS_PER_YEAR: i64 = 365 * 24 * 60 * 60;

/// Configuration for fixture generation
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    // Trade value bounds (inclusive, whole numbers)
    pub min_value: u64,
    pub max_value: u64,

    // Largest quantity a generated trade may carry
    pub max_quantity: u64,

    pub trades_per_symbol: usize,

    // When set, this share (0-100) of each symbol's trades is pinned to one value
    pub conflict_value: Option<u64>,
    pub conflict_percentage: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_value: 100,
            max_value: 100_000,
            max_quantity: 100,
            trades_per_symbol: 25,
            conflict_value: None,
            conflict_percentage: 0,
        }
    }
}

/// Produces random, valid trade records for tests, benches and the CLI
///
/// Every record it emits passes ledger validation for a registered symbol.
/// Trade values are whole numbers; each record's price is chosen so that
/// price × quantity hits the target value exactly.
pub struct TradeGenerator {
    rng: StdRng,
    config: GeneratorConfig,
}

impl TradeGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            config,
        }
    }

    /// Deterministic generator with the default configuration
    pub fn seeded(seed: u64) -> Self {
        Self::seeded_with(seed, GeneratorConfig::default())
    }

    pub fn seeded_with(seed: u64, config: GeneratorConfig) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            config,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// One record for `symbol` whose value lies in `[low, high]`
    pub fn gen_one_trade(&mut self, symbol: &str, low: u64, high: u64) -> TradeRecord {
        let (low, high) = (low.max(1), high.max(low.max(1)));
        let value = self.rng.random_range(low..=high);
        self.record_with_value(symbol, value)
    }

    /// `count` records for one symbol, in shuffled order
    ///
    /// With `count >= 2` the set includes one record valued exactly `low` and
    /// one valued exactly `high`. A `count` of 1 yields only the `low` record.
    pub fn gen_many_same_stock(
        &mut self,
        symbol: &str,
        low: u64,
        high: u64,
        count: usize,
    ) -> Vec<TradeRecord> {
        let (low, high) = (low.max(1), high.max(low.max(1)));
        let mut records = Vec::with_capacity(count);
        for bound in [low, high].into_iter().take(count) {
            records.push(self.record_with_value(symbol, bound));
        }
        while records.len() < count {
            let record = self.gen_one_trade(symbol, low, high);
            records.push(record);
        }
        records.shuffle(&mut self.rng);
        records
    }

    /// `count` records for one symbol, all valued exactly `value`
    pub fn gen_many_same_value(&mut self, symbol: &str, value: u64, count: usize) -> Vec<TradeRecord> {
        (0..count)
            .map(|_| self.record_with_value(symbol, value.max(1)))
            .collect()
    }

    /// `per_symbol` records for every symbol in the registry
    pub fn gen_many(
        &mut self,
        registry: &StockRegistry,
        low: u64,
        high: u64,
        per_symbol: usize,
    ) -> Vec<TradeRecord> {
        let mut records = Vec::with_capacity(registry.len() * per_symbol);
        for symbol in registry.iter() {
            for _ in 0..per_symbol {
                records.push(self.gen_one_trade(symbol, low, high));
            }
        }
        records.shuffle(&mut self.rng);
        records
    }

    /// Default ledger pre-loaded with `gen_many_same_stock` output
    ///
    /// Fails with `InvalidStockName` if `symbol` is not in the default registry.
    pub fn platform_many_same_stock(
        &mut self,
        symbol: &str,
        low: u64,
        high: u64,
        count: usize,
    ) -> Result<(TradeLedger, Vec<TradeRecord>), LedgerError> {
        let records = self.gen_many_same_stock(symbol, low, high, count);
        let ledger = Self::load(&records)?;
        Ok((ledger, records))
    }

    /// Default ledger where every symbol holds `count` trades valued `value`
    pub fn platform_many_same_value(
        &mut self,
        value: u64,
        count: usize,
    ) -> Result<(TradeLedger, Vec<TradeRecord>), LedgerError> {
        let registry = StockRegistry::default();
        let mut records = Vec::with_capacity(registry.len() * count);
        for symbol in registry.iter() {
            records.extend(self.gen_many_same_value(symbol, value, count));
        }
        let ledger = Self::load(&records)?;
        Ok((ledger, records))
    }

    /// Seed an existing ledger according to the generator's configuration
    ///
    /// Returns the number of records logged.
    pub fn populate(&mut self, ledger: &TradeLedger) -> Result<usize, LedgerError> {
        let config = self.config.clone();
        let mut logged = 0;

        for symbol in ledger.symbols() {
            for _ in 0..config.trades_per_symbol {
                let roll: u32 = self.rng.random_range(0..100);
                let record = match config.conflict_value {
                    Some(value) if roll < config.conflict_percentage => {
                        self.record_with_value(symbol, value.max(1))
                    }
                    _ => self.gen_one_trade(symbol, config.min_value, config.max_value),
                };
                ledger.log_transaction(record)?;
                logged += 1;
            }
        }

        info!("Populated ledger with {} generated trades", logged);
        Ok(logged)
    }

    fn load(records: &[TradeRecord]) -> Result<TradeLedger, LedgerError> {
        let ledger = TradeLedger::default();
        for record in records {
            ledger.log_transaction(record.clone())?;
        }
        Ok(ledger)
    }

    /// Build a record for `value` using a random divisor of it as quantity
    fn record_with_value(&mut self, symbol: &str, value: u64) -> TradeRecord {
        let limit = self.config.max_quantity.max(1).min(value);
        let divisors: Vec<u64> = (1..=limit).filter(|q| value % q == 0).collect();
        let quantity = divisors.choose(&mut self.rng).copied().unwrap_or(1);
        let price = Decimal::from(value / quantity);

        TradeRecord::new(symbol, price, quantity as i64, self.random_timestamp())
    }

    /// Random instant within calendar year 2022
    fn random_timestamp(&mut self) -> DateTime<Utc> {
        let offset: i64 = self.rng.random_range(0..SECONDS_PER_YEAR);
        DateTime::from_timestamp(YEAR_START + offset, 0).unwrap_or_default()
    }
}
