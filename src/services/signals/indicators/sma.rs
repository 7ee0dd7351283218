//! Simple Moving Average (SMA) indicator.

use crate::services::signals::Indicator;
use crate::types::Series;

/// Arithmetic mean of the trailing `period` values at each index.
///
/// The first `period - 1` positions are undefined. A zero period or a
/// series shorter than `period` yields an all-undefined result.
pub fn sma(values: &[f64], period: usize) -> Series {
    if period == 0 || values.len() < period {
        return Series::undefined(values.len());
    }

    let mut out = vec![None; period - 1];
    out.extend(values.windows(period).map(|window| Some(mean(window))));

    Series::from(out)
}

/// Mean of `values`, summed as offsets from the first value so a constant
/// window returns that value exactly.
pub(crate) fn mean(values: &[f64]) -> f64 {
    let Some(&anchor) = values.first() else {
        return 0.0;
    };
    anchor + values.iter().map(|v| v - anchor).sum::<f64>() / values.len() as f64
}

/// SMA (Simple Moving Average) indicator.
///
/// Price above the SMA reads as an uptrend, below as a downtrend.
pub struct Sma {
    period: usize,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for Sma {
    type Output = Series;

    fn id(&self) -> &'static str {
        "sma"
    }

    fn name(&self) -> String {
        format!("SMA ({})", self.period)
    }

    fn min_periods(&self) -> usize {
        self.period
    }

    fn calculate(&self, closes: &[f64]) -> Series {
        sma(closes, self.period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sma_values() {
        let out = sma(&[1.0, 2.0, 3.0, 4.0, 5.0], 3);
        assert_eq!(out.as_slice(), &[None, None, Some(2.0), Some(3.0), Some(4.0)]);
    }

    #[test]
    fn test_sma_insufficient_data() {
        let out = sma(&[1.0, 2.0], 3);
        assert_eq!(out.len(), 2);
        assert_eq!(out.defined_count(), 0);
    }

    #[test]
    fn test_sma_zero_period() {
        let out = sma(&[1.0, 2.0], 0);
        assert_eq!(out.as_slice(), &[None, None]);
    }

    #[test]
    fn test_sma_period_one_is_identity() {
        let out = sma(&[4.0, 5.0], 1);
        assert_eq!(out.as_slice(), &[Some(4.0), Some(5.0)]);
    }

    #[test]
    fn test_sma_constant_window_is_exact() {
        for price in [0.1, 3.3, 17.3, 123.45] {
            let out = sma(&[price; 30], 20);
            for i in 19..30 {
                assert_eq!(out.get(i), Some(price), "price {}", price);
            }
        }
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[2.0, 4.0, 9.0]), 5.0);
    }

    #[test]
    fn test_sma_indicator() {
        let sma = Sma::new(50);
        assert_eq!(sma.name(), "SMA (50)");
        assert_eq!(sma.min_periods(), 50);
        assert_eq!(sma.calculate(&[1.0; 49]).defined_count(), 0);
        assert_eq!(sma.calculate(&[1.0; 50]).last(), Some(1.0));
    }
}
