use rust_decimal::Decimal;
use serde::Serialize;
use std::process::ExitCode;
use trade_ledger::testing::TradeGenerator;
use trade_ledger::{LedgerConfig, Trade, TradeLedger};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Query results for one symbol, printed as JSON
#[derive(Serialize)]
struct SymbolReport {
    snapshot: trade_ledger::BucketSnapshot,
    min: Vec<Trade>,
    max: Vec<Trade>,
    midpoint: Decimal,
    floor: Vec<Trade>,
    ceiling: Vec<Trade>,
    range: Vec<Trade>,
}

fn main() -> ExitCode {
    // Load environment variables from .env file (if present)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trade_ledger=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = LedgerConfig::from_env()?;
    let registry = config.registry()?;

    tracing::info!(
        "📒 Scenario {:?}: {} ({} trades per symbol, seed {})",
        config.scenario,
        config.scenario.description(),
        config.trades_per_symbol,
        config.seed
    );

    let ledger = TradeLedger::new(registry);
    let mut generator = TradeGenerator::seeded_with(
        config.seed,
        config.scenario.to_config(config.trades_per_symbol),
    );
    generator.populate(&ledger)?;

    let mut reports = Vec::with_capacity(ledger.symbols().len());
    for symbol in ledger.symbols() {
        reports.push(report(&ledger, symbol)?);
    }

    println!("{}", serde_json::to_string_pretty(&reports)?);
    tracing::info!("✅ {} transactions logged", ledger.total_transactions());

    Ok(())
}

/// Run every query family against one symbol, querying at the bucket's midpoint value
fn report(ledger: &TradeLedger, symbol: &str) -> Result<SymbolReport, trade_ledger::LedgerError> {
    let snapshot = ledger.snapshot(symbol)?;
    let (low, high) = ledger
        .value_range(symbol)
        .unwrap_or((Decimal::ZERO, Decimal::ZERO));
    let midpoint = low + (high - low) / Decimal::TWO;

    Ok(SymbolReport {
        snapshot,
        min: ledger.min_transactions(symbol)?,
        max: ledger.max_transactions(symbol)?,
        midpoint,
        floor: ledger.floor_transactions(symbol, midpoint)?,
        ceiling: ledger.ceiling_transactions(symbol, midpoint)?,
        range: ledger.range_transactions(symbol, low, midpoint)?,
    })
}
