//! Bollinger Bands indicator.

use serde::{Deserialize, Serialize};

use super::sma::sma;
use crate::services::signals::Indicator;
use crate::types::Series;

/// Middle, upper and lower bands aligned to the input length.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BollingerResult {
    pub middle: Series,
    pub upper: Series,
    pub lower: Series,
}

/// Compute Bollinger Bands over `values`.
///
/// - Middle band: SMA(period)
/// - Upper band: middle + k * population standard deviation of the window
/// - Lower band: middle - k * population standard deviation of the window
pub fn bollinger_bands(values: &[f64], period: usize, k: f64) -> BollingerResult {
    let middle = sma(values, period);
    let mut upper = Vec::with_capacity(values.len());
    let mut lower = Vec::with_capacity(values.len());

    for (i, mean) in middle.iter().enumerate() {
        match mean {
            Some(mean) => {
                let window = &values[i + 1 - period..=i];
                let std_dev = std_dev(window, mean);
                upper.push(Some(mean + k * std_dev));
                lower.push(Some(mean - k * std_dev));
            }
            None => {
                upper.push(None);
                lower.push(None);
            }
        }
    }

    BollingerResult {
        middle,
        upper: Series::from(upper),
        lower: Series::from(lower),
    }
}

/// Population standard deviation around a known mean.
fn std_dev(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance: f64 =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Bollinger Bands indicator.
///
/// Signals:
/// - Price at or below the lower band = oversold (bullish)
/// - Price at or above the upper band = overbought (bearish)
pub struct BollingerBands {
    period: usize,
    std_dev_multiplier: f64,
}

impl Default for BollingerBands {
    fn default() -> Self {
        Self {
            period: 20,
            std_dev_multiplier: 2.0,
        }
    }
}

impl BollingerBands {
    pub fn new(period: usize, std_dev_multiplier: f64) -> Self {
        Self {
            period,
            std_dev_multiplier,
        }
    }
}

impl Indicator for BollingerBands {
    type Output = BollingerResult;

    fn id(&self) -> &'static str {
        "bollinger"
    }

    fn name(&self) -> String {
        format!("Bollinger Bands ({}, {})", self.period, self.std_dev_multiplier)
    }

    fn min_periods(&self) -> usize {
        self.period
    }

    fn calculate(&self, closes: &[f64]) -> BollingerResult {
        bollinger_bands(closes, self.period, self.std_dev_multiplier)
    }
}
