//! Instrument identifiers.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::InstrumentError;

/// Identifier of a traded instrument (e.g. `AAPL`, `SBER`).
///
/// Ordering is lexicographic over the identifier bytes, which is the primary
/// key when candles are sorted for output.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Instrument(String);

impl Instrument {
    /// Creates an instrument from a non-empty identifier.
    ///
    /// # Errors
    ///
    /// Returns [`InstrumentError::Empty`] if `id` is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, InstrumentError> {
        let id = id.into();
        if id.is_empty() {
            return Err(InstrumentError::Empty);
        }
        Ok(Self(id))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Instrument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Instrument {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Instrument {
    type Error = InstrumentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Instrument> for String {
    fn from(value: Instrument) -> Self {
        value.0
    }
}
