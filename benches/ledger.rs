//! Benchmarks for the trade ledger
//!
//! Insert throughput and floor/range query latency on a loaded bucket.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_decimal_macros::dec;
use trade_ledger::testing::TradeGenerator;
use trade_ledger::TradeLedger;

fn bench_log_transaction(c: &mut Criterion) {
    let mut generator = TradeGenerator::seeded(1);
    let records = generator.gen_many_same_stock("HSBA", 100, 100_000, 10_000);

    c.bench_function("log_transaction_10k", |b| {
        b.iter(|| {
            let ledger = TradeLedger::default();
            for record in records.iter().cloned() {
                ledger.log_transaction(black_box(record)).unwrap();
            }
            ledger
        })
    });
}

fn bench_queries(c: &mut Criterion) {
    let mut generator = TradeGenerator::seeded(2);
    let (ledger, _) = generator
        .platform_many_same_stock("HSBA", 100, 100_000, 10_000)
        .unwrap();

    c.bench_function("floor_transactions", |b| {
        b.iter(|| ledger.floor_transactions("HSBA", black_box(dec!(50000))).unwrap())
    });

    c.bench_function("range_transactions_narrow", |b| {
        b.iter(|| {
            ledger
                .range_transactions("HSBA", black_box(dec!(50000)), black_box(dec!(51000)))
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_log_transaction, bench_queries);
criterion_main!(benches);
