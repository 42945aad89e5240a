//! Batch tick-to-candle aggregation.

use candela_types::{Granularity, Instrument, Price, Tick};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tracing::debug;

use crate::{Candle, sort_candles};

/// Tick aggregator for one granularity.
///
/// Ticks are bucketed by instrument and bucket start as they are fed in.
/// A bucket is never complete until the whole batch has been processed, so
/// candles are only produced by [`finish`](Self::finish).
#[derive(Debug)]
pub struct CandleAggregator {
    granularity: Granularity,
    buckets: HashMap<Instrument, HashMap<DateTime<Utc>, CandleBuilder>>,
}

impl CandleAggregator {
    /// Creates a new aggregator for the given granularity.
    #[must_use]
    pub fn new(granularity: Granularity) -> Self {
        Self {
            granularity,
            buckets: HashMap::new(),
        }
    }

    /// Returns the granularity being aggregated to.
    #[must_use]
    pub const fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Returns the number of buckets opened so far.
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.values().map(HashMap::len).sum()
    }

    /// Adds a tick to its bucket, opening the bucket on first use.
    pub fn process(&mut self, tick: &Tick) {
        let start = self.granularity.bucket_start(tick.timestamp);

        self.buckets
            .entry(tick.instrument.clone())
            .or_default()
            .entry(start)
            .and_modify(|builder| builder.update(tick.price))
            .or_insert_with(|| CandleBuilder::new(tick.price));
    }

    /// Finishes aggregation, returning one candle per bucket in no particular order.
    #[must_use]
    pub fn finish(self) -> Vec<Candle> {
        let granularity = self.granularity;
        self.buckets
            .into_iter()
            .flat_map(|(instrument, by_start)| {
                by_start.into_iter().map(move |(start, builder)| {
                    builder.finish(instrument.clone(), granularity, start)
                })
            })
            .collect()
    }
}

/// Running OHLC state of one bucket.
#[derive(Debug)]
struct CandleBuilder {
    open: Price,
    high: Price,
    low: Price,
    close: Price,
    tick_count: u32,
}

impl CandleBuilder {
    /// Creates a new builder from the first price to arrive.
    const fn new(price: Price) -> Self {
        Self {
            open: price,
            high: price,
            low: price,
            close: price,
            tick_count: 1,
        }
    }

    /// Folds in the next price by arrival order.
    fn update(&mut self, price: Price) {
        self.high = self.high.max(price);
        self.low = self.low.min(price);
        self.close = price;
        self.tick_count = self.tick_count.saturating_add(1);
    }

    const fn finish(
        self,
        instrument: Instrument,
        granularity: Granularity,
        start: DateTime<Utc>,
    ) -> Candle {
        Candle {
            instrument,
            granularity,
            start,
            open: self.open,
            high: self.high,
            low: self.low,
            close: self.close,
            tick_count: self.tick_count,
        }
    }
}

/// Aggregates `ticks` into unordered candles of a single granularity.
#[must_use]
pub fn aggregate(ticks: &[Tick], granularity: Granularity) -> Vec<Candle> {
    let mut aggregator = CandleAggregator::new(granularity);
    for tick in ticks {
        aggregator.process(tick);
    }
    aggregator.finish()
}

/// Aggregates `ticks` once per granularity and returns the union of the candles.
///
/// Each granularity is bucketed independently; the result is unordered.
#[must_use]
pub fn aggregate_all(ticks: &[Tick], granularities: &[Granularity]) -> Vec<Candle> {
    granularities
        .iter()
        .flat_map(|&granularity| {
            let candles = aggregate(ticks, granularity);
            debug!(%granularity, ticks = ticks.len(), candles = candles.len(), "aggregated");
            candles
        })
        .collect()
}

/// Aggregates `ticks` at every [`Granularity`] and returns the ordered candle set.
#[must_use]
pub fn candle_set(ticks: &[Tick]) -> Vec<Candle> {
    let mut candles = aggregate_all(ticks, Granularity::all());
    sort_candles(&mut candles);
    candles
}
