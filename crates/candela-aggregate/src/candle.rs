//! Candle (OHLC) data structure.

use candela_types::{Granularity, Instrument, Price};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// OHLC summary of every tick that fell into one bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candle {
    /// Instrument the ticks belong to.
    pub instrument: Instrument,
    /// Bucket width.
    pub granularity: Granularity,
    /// Bucket start time.
    pub start: DateTime<Utc>,
    /// Price of the first tick to arrive in the bucket.
    pub open: Price,
    /// Highest price in the bucket.
    pub high: Price,
    /// Lowest price in the bucket.
    pub low: Price,
    /// Price of the last tick to arrive in the bucket.
    pub close: Price,
    /// Number of ticks in the bucket.
    pub tick_count: u32,
}

impl Candle {
    /// Returns the key candles are ordered by.
    ///
    /// The key is unique across a candle set: each (instrument, granularity,
    /// start) triple is produced by exactly one bucket.
    #[must_use]
    pub const fn sort_key(&self) -> (&Instrument, Granularity, DateTime<Utc>) {
        (&self.instrument, self.granularity, self.start)
    }

    /// Returns the price range (high - low).
    #[must_use]
    pub const fn range(&self) -> Price {
        Price::from_cents(self.high.cents() - self.low.cents())
    }

    /// Returns true if the bucket closed above its open.
    #[must_use]
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// Returns true if the bucket closed below its open.
    #[must_use]
    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }
}
