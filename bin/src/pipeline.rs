//! Batch pipeline: ticks in, ordered candles out.

use anyhow::{Context, Result};
use candela_lib::prelude::*;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Reads every tick from `input`, aggregates and writes the ordered candles.
///
/// Input is fully parsed before anything is written, so a malformed line
/// leaves `output` untouched. Returns the number of candles written.
pub(crate) fn run<R: BufRead, W: Write>(input: R, output: W) -> Result<usize> {
    let ticks = read_ticks(input).context("Failed to read ticks")?;
    debug!(ticks = ticks.len(), "ingested");

    let candles = candle_set(&ticks);

    CsvFormatter::new()
        .write_candles(&candles, output)
        .context("Failed to write candles")?;

    info!(
        ticks = ticks.len(),
        candles = candles.len(),
        "aggregation complete"
    );
    Ok(candles.len())
}
