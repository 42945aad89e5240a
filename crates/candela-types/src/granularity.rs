//! Candle granularity definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Width of a candle bucket.
///
/// The set is closed: candles are always produced for every variant. Variants
/// are declared shortest first, so the derived ordering sorts shorter
/// granularities before longer ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Granularity {
    /// 1-minute candles.
    #[serde(rename = "1min")]
    Minute1,
    /// 2-minute candles.
    #[serde(rename = "2min")]
    Minute2,
    /// 5-minute candles.
    #[serde(rename = "5min")]
    Minute5,
}

impl Granularity {
    /// Returns the bucket width in minutes.
    #[must_use]
    pub const fn minutes(&self) -> u32 {
        match self {
            Self::Minute1 => 1,
            Self::Minute2 => 2,
            Self::Minute5 => 5,
        }
    }

    /// Returns the bucket width in seconds.
    #[must_use]
    pub const fn seconds(&self) -> i64 {
        self.minutes() as i64 * 60
    }

    /// Returns the output label, e.g. `5min`.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Minute1 => "1min",
            Self::Minute2 => "2min",
            Self::Minute5 => "5min",
        }
    }

    /// Returns all granularities, shortest first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Minute1, Self::Minute2, Self::Minute5]
    }

    /// Returns the start of the bucket containing `timestamp`.
    ///
    /// Buckets are aligned to the Unix epoch: the timestamp is floored to a
    /// whole multiple of the bucket width, dropping any sub-second part.
    #[must_use]
    pub fn bucket_start(&self, timestamp: DateTime<Utc>) -> DateTime<Utc> {
        let secs = timestamp.timestamp();
        let start = secs - secs.rem_euclid(self.seconds());
        // Only reachable within one bucket of chrono's lower bound.
        DateTime::from_timestamp(start, 0).unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
