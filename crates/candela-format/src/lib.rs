//! Candle output formatting for the candela aggregator.
//!
//! - [`CsvFormatter`] - Header-less CSV with the OHLC quad packed into one field
//! - [`FormatError`] - Errors raised while writing

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/candela/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod error;

pub use crate::csv::CsvFormatter;
pub use error::FormatError;
