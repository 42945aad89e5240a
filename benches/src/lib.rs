//! Benchmark utilities for candela.
//!
//! Provides deterministic synthetic tick batches so aggregation benchmarks
//! are repeatable without fixture files.

use candela_lib::{Instrument, Price, Tick};
use chrono::{DateTime, TimeDelta, TimeZone, Utc};

/// Shape of a synthetic tick batch.
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkConfig {
    /// Number of distinct instruments.
    pub instruments: usize,
    /// Ticks generated per instrument.
    pub ticks_per_instrument: usize,
    /// Seconds between consecutive ticks of one instrument.
    pub spacing_secs: i64,
}

impl BenchmarkConfig {
    /// Returns the total number of ticks the config produces.
    #[must_use]
    pub const fn total_ticks(&self) -> usize {
        self.instruments * self.ticks_per_instrument
    }
}

/// Generates ticks interleaved across instruments, in time order.
///
/// Prices follow a bounded walk driven by a fixed-seed LCG.
#[must_use]
pub fn synthetic_ticks(config: &BenchmarkConfig) -> Vec<Tick> {
    let base: DateTime<Utc> = Utc
        .with_ymd_and_hms(2024, 1, 2, 9, 30, 0)
        .single()
        .unwrap_or_default();
    let instruments: Vec<Instrument> = (0..config.instruments)
        .filter_map(|i| Instrument::new(format!("SYM{i:04}")).ok())
        .collect();

    let mut state: u64 = 0x5eed;
    let mut prices = vec![10_000_u64; instruments.len()];
    let mut ticks = Vec::with_capacity(config.total_ticks());

    for step in 0..config.ticks_per_instrument {
        let offset = TimeDelta::seconds(config.spacing_secs * step as i64);
        for (instrument, price) in instruments.iter().zip(prices.iter_mut()) {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            let delta = (state >> 60) as i64 - 8;
            *price = price.saturating_add_signed(delta).max(1);
            ticks.push(Tick::new(
                instrument.clone(),
                Price::from_cents(*price),
                base + offset,
            ));
        }
    }

    ticks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_ticks_shape() {
        let config = BenchmarkConfig {
            instruments: 3,
            ticks_per_instrument: 10,
            spacing_secs: 7,
        };
        let ticks = synthetic_ticks(&config);

        assert_eq!(ticks.len(), config.total_ticks());
        assert!(ticks.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
        assert_eq!(ticks, synthetic_ticks(&config));
    }
}
