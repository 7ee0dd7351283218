//! MACD (Moving Average Convergence Divergence) indicator.

use serde::{Deserialize, Serialize};

use super::ema::ema;
use crate::services::signals::Indicator;
use crate::types::Series;

/// MACD line, signal line and histogram, each aligned to the input length.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacdResult {
    pub macd_line: Series,
    pub signal_line: Series,
    pub histogram: Series,
}

/// Compute MACD over `values`.
///
/// - MACD Line = EMA(fast) - EMA(slow), undefined where either EMA is
/// - Signal Line = EMA(signal) over the defined run of the MACD line,
///   shifted back to the MACD line's first defined index
/// - Histogram = MACD Line - Signal Line
pub fn macd(values: &[f64], fast: usize, slow: usize, signal: usize) -> MacdResult {
    let fast_ema = ema(values, fast);
    let slow_ema = ema(values, slow);
    let macd_line = fast_ema.sub(&slow_ema);

    let (offset, defined) = macd_line.defined_suffix();
    let signal_line = Series::right_aligned(values.len(), offset, ema(&defined, signal));

    let histogram = macd_line.sub(&signal_line);

    MacdResult {
        macd_line,
        signal_line,
        histogram,
    }
}

/// MACD indicator.
///
/// Buy signal: histogram crosses above zero (MACD crosses above signal line)
/// Sell signal: histogram crosses below zero
pub struct Macd {
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
}

impl Default for Macd {
    fn default() -> Self {
        Self {
            fast_period: 12,
            slow_period: 26,
            signal_period: 9,
        }
    }
}

impl Macd {
    pub fn new(fast_period: usize, slow_period: usize, signal_period: usize) -> Self {
        Self {
            fast_period,
            slow_period,
            signal_period,
        }
    }
}

impl Indicator for Macd {
    type Output = MacdResult;

    fn id(&self) -> &'static str {
        "macd"
    }

    fn name(&self) -> String {
        format!(
            "MACD ({}, {}, {})",
            self.fast_period, self.slow_period, self.signal_period
        )
    }

    /// Bars needed for the first defined histogram value.
    fn min_periods(&self) -> usize {
        self.fast_period.max(self.slow_period) + self.signal_period - 1
    }

    fn calculate(&self, closes: &[f64]) -> MacdResult {
        macd(
            closes,
            self.fast_period,
            self.slow_period,
            self.signal_period,
        )
    }
}
