//! Fixed-point prices.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::PriceParseError;

/// Price expressed as an integer number of hundredths.
///
/// Aggregation compares prices with `min`/`max` and keeps first/last values,
/// so prices never pass through floating point. Text is parsed digit by digit
/// and digits past the second decimal place are truncated toward zero.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// Number of fixed-point units per whole price unit.
    pub const SCALE: u64 = 100;

    /// Creates a price from a count of hundredths.
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Returns the price as a count of hundredths.
    #[must_use]
    pub const fn cents(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.0 / Self::SCALE, self.0 % Self::SCALE)
    }
}

impl FromStr for Price {
    type Err = PriceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(PriceParseError::Empty);
        }
        if s.starts_with('-') {
            return Err(PriceParseError::Negative(s.to_string()));
        }

        let (units, fraction) = match s.split_once('.') {
            Some((units, fraction)) => (units, Some(fraction)),
            None => (s, None),
        };
        let is_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !is_digits(units) || fraction.is_some_and(|f| !is_digits(f)) {
            return Err(PriceParseError::Invalid(s.to_string()));
        }

        let out_of_range = || PriceParseError::OutOfRange(s.to_string());
        let units = units.parse::<u64>().map_err(|_| out_of_range())?;
        let cents = fraction
            .unwrap_or_default()
            .bytes()
            .chain(std::iter::repeat(b'0'))
            .take(2)
            .fold(0, |acc, digit| acc * 10 + u64::from(digit - b'0'));

        units
            .checked_mul(Self::SCALE)
            .and_then(|scaled| scaled.checked_add(cents))
            .map(Self)
            .ok_or_else(out_of_range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_decimals() {
        assert_eq!("101.50".parse::<Price>().unwrap().cents(), 10150);
        assert_eq!("282.79".parse::<Price>().unwrap().cents(), 28279);
        assert_eq!("0.01".parse::<Price>().unwrap().cents(), 1);
    }

    #[test]
    fn test_parse_short_forms() {
        assert_eq!("100".parse::<Price>().unwrap().cents(), 10000);
        assert_eq!("99.5".parse::<Price>().unwrap().cents(), 9950);
        assert_eq!("0".parse::<Price>().unwrap(), Price::default());
    }

    #[test]
    fn test_extra_digits_truncate() {
        assert_eq!("1.999".parse::<Price>().unwrap().cents(), 199);
        assert_eq!("3.14159".parse::<Price>().unwrap().cents(), 314);
    }

    #[test]
    fn test_long_fraction_never_rounds_up() {
        let nines = format!("0.{}", "9".repeat(30));
        assert_eq!(nines.parse::<Price>().unwrap().cents(), 99);

        let long = format!("12.34{}", "9".repeat(60));
        assert_eq!(long.parse::<Price>().unwrap().cents(), 1234);
    }

    #[test]
    fn test_largest_representable() {
        let max = u64::MAX / 100;
        let text = format!("{max}.{:02}", u64::MAX % 100);
        assert_eq!(text.parse::<Price>().unwrap().cents(), u64::MAX);

        let over = format!("{max}.{:02}", u64::MAX % 100 + 1);
        assert!(matches!(
            over.parse::<Price>(),
            Err(PriceParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_rejects_malformed() {
        assert_eq!("".parse::<Price>(), Err(PriceParseError::Empty));
        assert!(matches!(
            "-1.00".parse::<Price>(),
            Err(PriceParseError::Negative(_))
        ));
        for bad in ["abc", "1.2.3", "1e5", ".5", "5.", " 5", "NaN", "+1"] {
            assert!(
                matches!(bad.parse::<Price>(), Err(PriceParseError::Invalid(_))),
                "{bad} should be invalid"
            );
        }
    }

    #[test]
    fn test_rejects_overflow() {
        let huge = "9".repeat(40);
        assert!(matches!(
            huge.parse::<Price>(),
            Err(PriceParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Price::from_cents(10150).to_string(), "101.50");
        assert_eq!(Price::from_cents(9900).to_string(), "99.00");
        assert_eq!(Price::from_cents(5).to_string(), "0.05");
        assert_eq!(Price::from_cents(0).to_string(), "0.00");
    }

    #[test]
    fn test_ordering_is_exact() {
        let a: Price = "0.30".parse().unwrap();
        let b: Price = "0.3".parse().unwrap();
        assert_eq!(a, b);
        assert!(a < "0.31".parse().unwrap());
    }
}
