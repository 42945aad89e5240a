//! Line-oriented tick reader.

use candela_types::Tick;
use std::io::{BufRead, Lines};

use crate::{IngestError, parse_line};

/// Iterator over ticks read one line at a time.
///
/// `\n` and `\r\n` terminators are both accepted. Every line, including a
/// blank one, must hold a tick; each item is either the parsed tick or the
/// error for the offending line.
#[derive(Debug)]
pub struct TickReader<R> {
    lines: Lines<R>,
    line: u64,
}

impl<R: BufRead> TickReader<R> {
    /// Creates a reader over `input`.
    pub fn new(input: R) -> Self {
        Self {
            lines: input.lines(),
            line: 0,
        }
    }
}

impl<R: BufRead> Iterator for TickReader<R> {
    type Item = Result<Tick, IngestError>;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.lines.next()?;
        self.line += 1;
        let line = self.line;
        Some(
            text.map_err(|source| IngestError::Io { line, source })
                .and_then(|text| parse_line(&text, line)),
        )
    }
}

/// Reads every tick from `input`, preserving arrival order.
///
/// # Errors
///
/// Returns the first malformed line's error; no ticks are returned in that case.
pub fn read_ticks<R: BufRead>(input: R) -> Result<Vec<Tick>, IngestError> {
    TickReader::new(input).collect()
}
