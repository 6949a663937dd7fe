// ============================================================================
// Matching Engine Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Crossing - End-to-end order matching through the engine
// 2. Order Book Operations - Snapshot and no-match submission paths
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use priority_orderbook::prelude::*;
use rust_decimal::Decimal;
use std::hint::black_box;
use std::sync::Arc;

fn sell(engine: &MatchingEngine, owner: String, price: i64, quantity: u64, arrival: u64) {
    engine
        .submit_sell(Order::new(
            owner,
            "BENCH",
            Side::Sell,
            Decimal::from(price),
            quantity,
            arrival,
            Arc::new(NoOpClientHandle),
        ))
        .unwrap();
}

// ============================================================================
// Crossing Benchmarks
// ============================================================================

fn benchmark_price_time_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("price_time_matching");

    for num_orders in [100i64, 1000, 10000].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(num_orders),
            num_orders,
            |b, &num_orders| {
                let engine = MatchingEngine::new("BENCH");

                // Pre-populate the ask side at ascending prices
                for i in 0..num_orders / 2 {
                    sell(&engine, format!("seller{}", i), 50_000 + i, 1, i as u64);
                }

                let mut arrival = num_orders as u64;
                b.iter(|| {
                    // Buy crossing the first few price levels
                    arrival += 1;
                    let buy = Order::new(
                        "bench_buyer",
                        "BENCH",
                        Side::Buy,
                        Decimal::from(50_005),
                        1,
                        arrival,
                        Arc::new(NoOpClientHandle),
                    );
                    black_box(engine.submit_buy(buy).unwrap());
                });
            },
        );
    }

    group.finish();
}

// ============================================================================
// Order Book Operations Benchmarks
// ============================================================================

fn benchmark_order_book_snapshot(c: &mut Criterion) {
    c.bench_function("order_book_snapshot", |b| {
        let engine = MatchingEngine::new("BENCH");

        // 100 levels on each side
        for i in 0..100i64 {
            engine
                .submit_buy(Order::new(
                    format!("buyer{}", i),
                    "BENCH",
                    Side::Buy,
                    Decimal::from(49_900 - i * 10),
                    1,
                    i as u64,
                    Arc::new(NoOpClientHandle),
                ))
                .unwrap();
            sell(
                &engine,
                format!("seller{}", i),
                50_100 + i * 10,
                1,
                (100 + i) as u64,
            );
        }

        b.iter(|| {
            black_box(engine.snapshot(10));
        });
    });
}

fn benchmark_order_submission_no_match(c: &mut Criterion) {
    c.bench_function("order_submission_no_match", |b| {
        let engine = MatchingEngine::new("BENCH");

        let mut arrival = 0u64;
        b.iter(|| {
            // Submit an order that cannot match (empty opposite side)
            arrival += 1;
            let sell = Order::new(
                "bench_seller",
                "BENCH",
                Side::Sell,
                Decimal::from(50_000),
                1,
                arrival,
                Arc::new(NoOpClientHandle),
            );
            black_box(engine.submit_sell(sell).unwrap());
        });
    });
}

criterion_group!(
    benches,
    benchmark_price_time_matching,
    benchmark_order_book_snapshot,
    benchmark_order_submission_no_match,
);
criterion_main!(benches);
