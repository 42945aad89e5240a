//! Core types for the candela tick-to-candle aggregator.
//!
//! This crate provides the fundamental data structures used throughout candela:
//!
//! - [`Tick`] - A single traded price for an instrument at a point in time
//! - [`Instrument`] - Non-empty instrument identifier
//! - [`Price`] - Fixed-point price in hundredths
//! - [`Granularity`] - Candle bucket width (1, 2 or 5 minutes)

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/candela/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod granularity;
mod instrument;
mod price;
mod tick;

pub use error::{InstrumentError, PriceParseError};
pub use granularity::Granularity;
pub use instrument::Instrument;
pub use price::Price;
pub use tick::Tick;
