//! Error types for candela value parsing.

use thiserror::Error;

/// Error returned when a price string cannot be turned into a [`Price`](crate::Price).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceParseError {
    /// The field was empty.
    #[error("empty price")]
    Empty,

    /// The value is below zero.
    #[error("negative price: {0}")]
    Negative(String),

    /// The text is not a plain decimal number.
    #[error("invalid price '{0}', expected a plain decimal such as 101.25")]
    Invalid(String),

    /// The value does not fit the fixed-point representation.
    #[error("price out of range: {0}")]
    OutOfRange(String),
}

/// Error returned when an instrument identifier is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InstrumentError {
    /// The identifier was empty.
    #[error("empty instrument identifier")]
    Empty,
}
