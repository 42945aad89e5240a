//! Output ordering of candles.

use crate::Candle;

/// Sorts candles by instrument, then granularity (shortest first), then
/// bucket start.
///
/// Sort keys are unique within a candle set, so the result is fully
/// determined by the candles and not by their input order.
pub fn sort_candles(candles: &mut [Candle]) {
    candles.sort_unstable_by(|a, b| a.sort_key().cmp(&b.sort_key()));
}
