//! Tick-to-candle aggregation for the candela aggregator.
//!
//! This crate provides the aggregation core:
//!
//! - [`Candle`] - OHLC summary of one bucket
//! - [`CandleAggregator`] - Buckets ticks for a single granularity
//! - [`aggregate_all`] - Unordered candles across several granularities
//! - [`sort_candles`] - Output ordering by instrument, granularity and start
//! - [`candle_set`] - Every granularity, aggregated and ordered

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/candela/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod aggregator;
mod candle;
mod order;

pub use aggregator::{CandleAggregator, aggregate, aggregate_all, candle_set};
pub use candle::Candle;
pub use order::sort_candles;
