//! Relative Strength Index (RSI) indicator.

use crate::services::signals::Indicator;
use crate::types::Series;

/// Default stand-in for a zero average loss. Small enough that any real
/// gain over it rounds the RSI to exactly 100.
pub const DEFAULT_EPSILON: f64 = f64::MIN_POSITIVE;

/// Wilder-smoothed RSI.
///
/// Needs more than `period` values; the first defined output is at index
/// `period`. A zero average loss is replaced by `epsilon` so a window with
/// no losses reads as 100 (and a flat window as 0) instead of dividing by zero.
pub fn rsi(values: &[f64], period: usize, epsilon: f64) -> Series {
    if period == 0 || values.len() <= period {
        return Series::undefined(values.len());
    }

    let mut initial_gain = 0.0;
    let mut initial_loss = 0.0;
    for i in 1..=period {
        let change = values[i] - values[i - 1];
        if change > 0.0 {
            initial_gain += change;
        } else {
            initial_loss -= change;
        }
    }

    let mut avg_gain = initial_gain / period as f64;
    let mut avg_loss = initial_loss / period as f64;

    let mut out = vec![None; period];
    out.push(Some(rsi_value(avg_gain, avg_loss, epsilon)));

    for i in (period + 1)..values.len() {
        let change = values[i] - values[i - 1];
        let (gain, loss) = if change > 0.0 {
            (change, 0.0)
        } else {
            (0.0, -change)
        };

        avg_gain = (avg_gain * (period - 1) as f64 + gain) / period as f64;
        avg_loss = (avg_loss * (period - 1) as f64 + loss) / period as f64;
        out.push(Some(rsi_value(avg_gain, avg_loss, epsilon)));
    }

    Series::from(out)
}

fn rsi_value(avg_gain: f64, avg_loss: f64, epsilon: f64) -> f64 {
    let avg_loss = if avg_loss == 0.0 { epsilon } else { avg_loss };
    let rs = avg_gain / avg_loss;
    (100.0 - 100.0 / (1.0 + rs)).clamp(0.0, 100.0)
}

/// RSI (Relative Strength Index) indicator.
///
/// Values range from 0-100:
/// - Below 30: Oversold (potential buy signal)
/// - Above 70: Overbought (potential sell signal)
pub struct Rsi {
    period: usize,
    epsilon: f64,
}

impl Default for Rsi {
    fn default() -> Self {
        Self {
            period: 14,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl Rsi {
    pub fn new(period: usize, epsilon: f64) -> Self {
        Self { period, epsilon }
    }
}

impl Indicator for Rsi {
    type Output = Series;

    fn id(&self) -> &'static str {
        "rsi"
    }

    fn name(&self) -> String {
        format!("RSI ({})", self.period)
    }

    fn min_periods(&self) -> usize {
        self.period + 1
    }

    fn calculate(&self, closes: &[f64]) -> Series {
        rsi(closes, self.period, self.epsilon)
    }
}
