//! Trading signals service module.
//!
//! Provides technical indicator calculations, heuristic recommendation
//! scoring, and per-symbol analysis through a market data provider.

pub mod indicators;
pub mod scorer;
pub mod store;

pub use scorer::{score, ScoringInputs};
pub use store::SignalStore;

use indicators::{BollingerBands, Macd, Rsi, Sma};

use crate::config::SignalConfig;
use crate::types::{Analysis, IndicatorSnapshot};

/// Trait for implementing technical indicators over a close series.
pub trait Indicator: Send + Sync {
    /// Indicator output, index-aligned with the input.
    type Output;

    /// Unique identifier for this indicator.
    fn id(&self) -> &'static str;

    /// Human-readable name including parameters.
    fn name(&self) -> String;

    /// Minimum number of closes needed for the latest value to be defined.
    fn min_periods(&self) -> usize;

    /// Calculate the indicator. Never fails: positions without enough
    /// history are undefined.
    fn calculate(&self, closes: &[f64]) -> Self::Output;
}

/// Run every indicator over `closes` and score the latest values against
/// `price`.
pub fn analyze(closes: &[f64], price: f64, config: &SignalConfig) -> Analysis {
    let sma = Sma::new(config.sma_period).calculate(closes);
    let rsi = Rsi::new(config.rsi_period, config.rsi_epsilon).calculate(closes);
    let macd =
        Macd::new(config.macd_fast, config.macd_slow, config.macd_signal).calculate(closes);
    let bollinger =
        BollingerBands::new(config.bollinger_period, config.bollinger_k).calculate(closes);

    let indicators = IndicatorSnapshot {
        sma: sma.last(),
        rsi: rsi.last(),
        macd: macd.macd_line.last(),
        macd_signal: macd.signal_line.last(),
        macd_histogram: macd.histogram.last(),
        bollinger_upper: bollinger.upper.last(),
        bollinger_middle: bollinger.middle.last(),
        bollinger_lower: bollinger.lower.last(),
    };

    let recommendation = score(
        &ScoringInputs {
            price,
            sma: indicators.sma,
            rsi: indicators.rsi,
            macd: &macd,
            bollinger: &bollinger,
        },
        &config.scoring,
    );

    Analysis {
        price,
        indicators,
        recommendation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SignalClass;

    #[test]
    fn test_analyze_short_history_is_neutral() {
        let analysis = analyze(&[100.0, 101.0], 101.0, &SignalConfig::default());

        assert_eq!(analysis.indicators, IndicatorSnapshot::default());
        assert_eq!(analysis.recommendation.score, 50);
        assert_eq!(analysis.recommendation.signal, SignalClass::Hold);
    }

    #[test]
    fn test_analyze_fills_snapshot_with_enough_history() {
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + (i as f64 * 0.3).sin()).collect();
        let price = *closes.last().unwrap();
        let analysis = analyze(&closes, price, &SignalConfig::default());

        let snapshot = &analysis.indicators;
        assert!(snapshot.sma.is_some());
        assert!(snapshot.rsi.is_some());
        assert!(snapshot.macd.is_some());
        assert!(snapshot.macd_signal.is_some());
        assert!(snapshot.macd_histogram.is_some());
        assert!(snapshot.bollinger_upper.is_some());
        assert!(snapshot.bollinger_middle.is_some());
        assert!(snapshot.bollinger_lower.is_some());
        assert_eq!(analysis.price, price);
    }
}
