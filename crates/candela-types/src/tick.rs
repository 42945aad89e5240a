//! Tick data representation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Instrument, Price};

/// A single price observation for an instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tick {
    /// Instrument the price belongs to.
    pub instrument: Instrument,
    /// Observed price.
    pub price: Price,
    /// Time of the observation (UTC).
    pub timestamp: DateTime<Utc>,
}

impl Tick {
    /// Creates a new tick.
    #[must_use]
    pub const fn new(instrument: Instrument, price: Price, timestamp: DateTime<Utc>) -> Self {
        Self {
            instrument,
            price,
            timestamp,
        }
    }
}
