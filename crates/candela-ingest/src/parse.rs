//! Parsing of single tick records.

use candela_types::{Instrument, InstrumentError, Price, PriceParseError, Tick};
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors that can occur while ingesting ticks.
#[derive(Error, Debug)]
pub enum IngestError {
    /// The record does not have exactly three fields.
    #[error("line {line}: expected 3 fields (instrument,price,timestamp), found {found}")]
    FieldCount {
        /// 1-based input line.
        line: u64,
        /// Number of fields present.
        found: usize,
    },

    /// The instrument field is unusable.
    #[error("line {line}: {source}")]
    Instrument {
        /// 1-based input line.
        line: u64,
        /// Underlying error.
        source: InstrumentError,
    },

    /// The price field is unusable.
    #[error("line {line}: {source}")]
    Price {
        /// 1-based input line.
        line: u64,
        /// Underlying error.
        source: PriceParseError,
    },

    /// The timestamp field is not RFC 3339.
    #[error("line {line}: invalid timestamp '{value}': {source}")]
    Timestamp {
        /// 1-based input line.
        line: u64,
        /// Offending field text.
        value: String,
        /// Underlying error.
        source: chrono::ParseError,
    },

    /// Reading the line failed (I/O error, invalid UTF-8).
    #[error("line {line}: I/O error: {source}")]
    Io {
        /// 1-based input line.
        line: u64,
        /// Underlying error.
        source: std::io::Error,
    },
}

impl IngestError {
    /// Returns the input line the error refers to.
    #[must_use]
    pub const fn line(&self) -> u64 {
        match self {
            Self::FieldCount { line, .. }
            | Self::Instrument { line, .. }
            | Self::Price { line, .. }
            | Self::Timestamp { line, .. }
            | Self::Io { line, .. } => *line,
        }
    }
}

/// Parses a tick from one input line (without its line terminator).
///
/// Fields are split on every comma; there is no quoting. An empty line is a
/// single empty field and fails the field count check.
///
/// # Errors
///
/// Returns an error if the line does not hold exactly three fields or if any
/// field fails to parse.
pub fn parse_line(text: &str, line: u64) -> Result<Tick, IngestError> {
    let fields: Vec<&str> = text.split(',').collect();
    let &[instrument, price, timestamp] = fields.as_slice() else {
        return Err(IngestError::FieldCount {
            line,
            found: fields.len(),
        });
    };

    let instrument = Instrument::new(instrument)
        .map_err(|source| IngestError::Instrument { line, source })?;
    let price = price
        .parse::<Price>()
        .map_err(|source| IngestError::Price { line, source })?;
    let timestamp = DateTime::parse_from_rfc3339(timestamp)
        .map_err(|source| IngestError::Timestamp {
            line,
            value: timestamp.to_string(),
            source,
        })?
        .with_timezone(&Utc);

    Ok(Tick::new(instrument, price, timestamp))
}
