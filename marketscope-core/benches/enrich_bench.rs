//! Benchmark for the per-symbol enrichment pass (one year of daily bars).

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use marketscope_core::domain::{Bar, Symbol};
use marketscope_core::indicators::enrich;

fn year_of_bars() -> Vec<Bar> {
    let base = NaiveDate::from_ymd_opt(2024, 8, 7).unwrap();
    (0..252)
        .map(|i| {
            let close = 100.0 + (i as f64 * 0.37).sin() * 20.0 + i as f64 * 0.1;
            Bar {
                symbol: "BENCH.NS".into(),
                date: base + Duration::days(i),
                open: close - 0.3,
                high: close + 1.2,
                low: close - 1.2,
                close,
                volume: 1_000_000,
                adj_close: close,
            }
        })
        .collect()
}

fn bench_enrich(c: &mut Criterion) {
    let bars = year_of_bars();
    c.bench_function("enrich_one_year", |b| {
        b.iter(|| enrich(Symbol::new("BENCH.NS"), black_box(bars.clone())))
    });
}

criterion_group!(benches, bench_enrich);
criterion_main!(benches);
