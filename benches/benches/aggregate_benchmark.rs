//! Aggregation benchmarks over synthetic tick batches.
//!
//! Run with: `cargo bench --package candela-bench`

use candela_bench::{BenchmarkConfig, synthetic_ticks};
use candela_lib::{CsvFormatter, Granularity, aggregate, candle_set};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

/// Benchmark configurations for different batch shapes.
fn benchmark_configs() -> Vec<(&'static str, BenchmarkConfig)> {
    vec![
        (
            "few-instruments-dense",
            BenchmarkConfig {
                instruments: 4,
                ticks_per_instrument: 25_000,
                spacing_secs: 1,
            },
        ),
        (
            "many-instruments-sparse",
            BenchmarkConfig {
                instruments: 500,
                ticks_per_instrument: 200,
                spacing_secs: 45,
            },
        ),
    ]
}

fn aggregate_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for (name, config) in benchmark_configs() {
        let ticks = synthetic_ticks(&config);
        group.throughput(Throughput::Elements(ticks.len() as u64));

        for &granularity in Granularity::all() {
            group.bench_with_input(
                BenchmarkId::new(name, granularity),
                &ticks,
                |b, ticks| b.iter(|| aggregate(black_box(ticks), granularity)),
            );
        }

        group.bench_with_input(BenchmarkId::new(name, "candle_set"), &ticks, |b, ticks| {
            b.iter(|| candle_set(black_box(ticks)));
        });
    }

    group.finish();
}

fn format_benchmark(c: &mut Criterion) {
    let configs = benchmark_configs();
    let (name, config) = &configs[1];
    let candles = candle_set(&synthetic_ticks(config));

    let mut group = c.benchmark_group("format");
    group.throughput(Throughput::Elements(candles.len() as u64));
    group.bench_function(*name, |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(candles.len() * 64);
            CsvFormatter::new()
                .write_candles(black_box(&candles), &mut out)
                .expect("in-memory write");
            out
        });
    });
    group.finish();
}

criterion_group!(benches, aggregate_benchmark, format_benchmark);
criterion_main!(benches);
