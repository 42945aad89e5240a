//! CSV output format.

use candela_aggregate::Candle;
use chrono::SecondsFormat;
use std::io::Write;

use crate::FormatError;

/// CSV formatter for candles.
///
/// Each candle becomes one record of four fields:
///
/// 1. instrument
/// 2. `open,high,low,close`, two decimals each, as a single quoted field
/// 3. bucket start in RFC 3339 (UTC)
/// 4. granularity label, e.g. `1min`
///
/// No header row is written.
///
/// The bucket start is always rendered in UTC (`...Z`), whatever offset the
/// input ticks carried. Ticks are bucketed as instants, so a bucket can mix
/// offsets and has no single input offset to render.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvFormatter;

impl CsvFormatter {
    /// Creates a new CSV formatter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the four fields of a candle record, before CSV quoting.
    #[must_use]
    pub fn record(&self, candle: &Candle) -> [String; 4] {
        [
            candle.instrument.to_string(),
            format!(
                "{},{},{},{}",
                candle.open, candle.high, candle.low, candle.close
            ),
            candle.start.to_rfc3339_opts(SecondsFormat::Secs, true),
            candle.granularity.label().to_string(),
        ]
    }

    /// Writes candles to the output, one record per candle, in slice order.
    ///
    /// # Errors
    ///
    /// Returns an error if writing or flushing fails.
    pub fn write_candles<W: Write>(&self, candles: &[Candle], writer: W) -> Result<(), FormatError> {
        let mut writer = ::csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(::csv::Terminator::Any(b'\n'))
            .from_writer(writer);

        for candle in candles {
            writer.write_record(self.record(candle))?;
        }

        writer.flush()?;
        Ok(())
    }
}
