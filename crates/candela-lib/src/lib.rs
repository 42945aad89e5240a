//! Batch aggregation of price ticks into OHLC candles.
//!
//! This is a facade crate that re-exports functionality from the candela
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use candela_lib::prelude::*;
//!
//! let input = "AAPL,100.00,2024-01-02T10:00:10Z\nAAPL,101.50,2024-01-02T10:00:40Z\n";
//! let ticks = read_ticks(input.as_bytes()).unwrap();
//! let candles = candle_set(&ticks);
//!
//! let mut out = Vec::new();
//! CsvFormatter::new().write_candles(&candles, &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap().lines().count(), 3);
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/candela/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use candela_types::*;

// Re-export aggregation
pub use candela_aggregate::{
    Candle, CandleAggregator, aggregate, aggregate_all, candle_set, sort_candles,
};

// Re-export ingestion
#[cfg(feature = "ingest")]
pub use candela_ingest::{IngestError, TickReader, parse_line, read_ticks};

// Re-export formatters
#[cfg(feature = "format")]
pub use candela_format::{CsvFormatter, FormatError};

/// Prelude module for convenient imports.
///
/// ```
/// use candela_lib::prelude::*;
/// ```
pub mod prelude {
    pub use candela_types::{Granularity, Instrument, Price, Tick};

    pub use candela_aggregate::{Candle, CandleAggregator, candle_set, sort_candles};

    #[cfg(feature = "ingest")]
    pub use candela_ingest::{IngestError, TickReader, read_ticks};

    #[cfg(feature = "format")]
    pub use candela_format::{CsvFormatter, FormatError};
}
