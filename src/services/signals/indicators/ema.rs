//! Exponential Moving Average (EMA).

use super::sma::mean;
use crate::types::Series;

/// EMA seeded with the simple average of the first `period` values.
///
/// Index `period - 1` holds the seed; later positions follow
/// `ema[i] = (values[i] - ema[i-1]) * k + ema[i-1]` with `k = 2 / (period + 1)`.
/// Fewer than `period` values (or a zero period) yields an all-undefined series.
pub fn ema(values: &[f64], period: usize) -> Series {
    if period == 0 || values.len() < period {
        return Series::undefined(values.len());
    }

    let multiplier = 2.0 / (period as f64 + 1.0);

    // First EMA is SMA
    let seed = mean(&values[..period]);

    let mut out = Vec::with_capacity(values.len());
    out.resize(period - 1, None);
    out.push(Some(seed));

    let mut prev = seed;
    for value in &values[period..] {
        prev = (value - prev) * multiplier + prev;
        out.push(Some(prev));
    }

    Series::from(out)
}
