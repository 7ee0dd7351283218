//! Heuristic recommendation scorer.
//!
//! Starts from a neutral score and applies, in order, a trend rule, an RSI
//! rule, a MACD histogram rule and a Bollinger band rule. Each rule moves the
//! score and may record a reason; only the most recently recorded reason is
//! reported.

use tracing::trace;

use super::indicators::{BollingerResult, MacdResult};
use crate::config::ScoringConfig;
use crate::types::Recommendation;

const MIXED_SIGNALS: &str = "Mixed signals: no indicator gives a clear direction.";

/// Everything the scorer looks at for one symbol.
#[derive(Debug, Clone, Copy)]
pub struct ScoringInputs<'a> {
    pub price: f64,
    /// Latest trend SMA value.
    pub sma: Option<f64>,
    /// Latest RSI value.
    pub rsi: Option<f64>,
    pub macd: &'a MacdResult,
    pub bollinger: &'a BollingerResult,
}

/// Score a symbol and classify the result.
pub fn score(inputs: &ScoringInputs<'_>, config: &ScoringConfig) -> Recommendation {
    let mut score = config.base_score;
    let mut reason: Option<String> = None;

    // Trend
    if let Some(sma) = inputs.sma {
        if inputs.price > sma {
            score += config.trend_delta;
            reason = Some("Price is above its moving average, indicating a bullish trend.".into());
        } else {
            score -= config.trend_delta;
            reason = Some("Price is below its moving average, indicating a bearish trend.".into());
        }
    }

    // Momentum
    if let Some(rsi) = inputs.rsi {
        if rsi < config.rsi_oversold {
            score += config.rsi_extreme_delta;
            reason = Some(format!(
                "RSI at {:.1} signals oversold conditions, a potential buying opportunity.",
                rsi
            ));
        } else if rsi > config.rsi_overbought {
            score -= config.rsi_extreme_delta;
            reason = Some(format!(
                "RSI at {:.1} signals overbought conditions, a potential selling point.",
                rsi
            ));
        } else if rsi < config.rsi_lean_low {
            score += config.rsi_lean_delta;
        } else if rsi > config.rsi_lean_high {
            score -= config.rsi_lean_delta;
        }
    }

    // MACD histogram crossover
    if let Some((prev, curr)) = inputs.macd.histogram.last_two() {
        if prev <= 0.0 && curr > 0.0 {
            score += config.macd_cross_delta;
            reason = Some("MACD crossed above its signal line (bullish crossover).".into());
        } else if prev >= 0.0 && curr < 0.0 {
            score -= config.macd_cross_delta;
            reason = Some("MACD crossed below its signal line (bearish crossover).".into());
        } else if curr > 0.0 {
            score += config.macd_bias_delta;
        } else {
            score -= config.macd_bias_delta;
        }
    }

    // Bollinger extremes
    if let (Some(upper), Some(lower)) = (inputs.bollinger.upper.last(), inputs.bollinger.lower.last())
    {
        if inputs.price <= lower {
            score += config.band_touch_delta;
            reason = Some("Price touched the lower Bollinger Band, suggesting a rebound.".into());
        } else if inputs.price >= upper {
            score -= config.band_touch_delta;
            reason = Some("Price touched the upper Bollinger Band, suggesting a pullback.".into());
        }
    }

    let score = score.clamp(0, 100) as u8;
    let signal = config.classify(score);
    trace!(score, ?signal, "Scored recommendation");

    Recommendation {
        signal,
        score,
        reason: reason.unwrap_or_else(|| MIXED_SIGNALS.to_string()),
    }
}
