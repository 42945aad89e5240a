//! Tick ingestion for the candela tick-to-candle aggregator.
//!
//! Input is one comma-separated tick per line, no header and no quoting:
//!
//! ```text
//! AAPL,100.00,2024-01-02T10:00:10Z
//! ```
//!
//! - [`parse_line`] - Parse a single tick
//! - [`TickReader`] - Iterator over ticks read from any [`std::io::BufRead`]
//! - [`read_ticks`] - Materializes every tick or fails on the first bad line

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/candela/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod parse;
mod reader;

pub use parse::{IngestError, parse_line};
pub use reader::{TickReader, read_ticks};
