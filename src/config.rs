use std::env;

use crate::services::signals::indicators::rsi;
use crate::types::{HistoryRange, SignalClass};

/// Symbols scanned when `SCAN_SYMBOLS` is not set.
pub const DEFAULT_UNIVERSE: &[&str] = &[
    "AAPL", "MSFT", "GOOGL", "AMZN", "NVDA", "META", "TSLA", "BRK.B", "JPM", "V", "JNJ", "WMT",
    "PG", "MA", "HD", "XOM", "UNH", "BAC", "KO", "PEP",
];

/// Score adjustments and class cut-offs used by the recommendation scorer.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    /// Neutral starting score.
    pub base_score: i32,
    /// Applied when price is above (+) or below (-) the trend SMA.
    pub trend_delta: i32,
    pub rsi_oversold: f64,
    pub rsi_overbought: f64,
    /// Applied on an oversold (+) or overbought (-) RSI.
    pub rsi_extreme_delta: i32,
    pub rsi_lean_low: f64,
    pub rsi_lean_high: f64,
    /// Applied when RSI leans low (+) or high (-) without being extreme.
    pub rsi_lean_delta: i32,
    /// Applied on a MACD histogram sign crossover.
    pub macd_cross_delta: i32,
    /// Applied on the histogram sign when no crossover happened.
    pub macd_bias_delta: i32,
    /// Applied when price touches the lower (+) or upper (-) band.
    pub band_touch_delta: i32,
    pub strong_buy_at: u8,
    pub buy_at: u8,
    pub sell_at: u8,
    pub strong_sell_at: u8,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_score: 50,
            trend_delta: 10,
            rsi_oversold: 30.0,
            rsi_overbought: 70.0,
            rsi_extreme_delta: 20,
            rsi_lean_low: 45.0,
            rsi_lean_high: 55.0,
            rsi_lean_delta: 5,
            macd_cross_delta: 15,
            macd_bias_delta: 5,
            band_touch_delta: 15,
            strong_buy_at: 80,
            buy_at: 60,
            sell_at: 40,
            strong_sell_at: 20,
        }
    }
}

impl ScoringConfig {
    /// Map a clamped score to its signal class.
    ///
    /// Buy classes are inclusive at their lower cut-off and sell classes at
    /// their upper cut-off, so with the defaults 60 is `Buy` and 40 is `Sell`.
    pub fn classify(&self, score: u8) -> SignalClass {
        match score {
            s if s >= self.strong_buy_at => SignalClass::StrongBuy,
            s if s >= self.buy_at => SignalClass::Buy,
            s if s <= self.strong_sell_at => SignalClass::StrongSell,
            s if s <= self.sell_at => SignalClass::Sell,
            _ => SignalClass::Hold,
        }
    }
}

/// Indicator periods and scoring constants.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalConfig {
    /// Trend SMA period.
    pub sma_period: usize,
    pub rsi_period: usize,
    /// Stand-in for a zero average loss in the RSI ratio.
    pub rsi_epsilon: f64,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    pub bollinger_period: usize,
    /// Band width in standard deviations. Must be non-negative.
    pub bollinger_k: f64,
    pub scoring: ScoringConfig,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            sma_period: 50,
            rsi_period: 14,
            rsi_epsilon: rsi::DEFAULT_EPSILON,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            bollinger_period: 20,
            bollinger_k: 2.0,
            scoring: ScoringConfig::default(),
        }
    }
}

impl SignalConfig {
    /// Load indicator periods from environment variables, keeping the
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            sma_period: env_parse("SMA_PERIOD").unwrap_or(defaults.sma_period),
            rsi_period: env_parse("RSI_PERIOD").unwrap_or(defaults.rsi_period),
            bollinger_period: env_parse("BOLLINGER_PERIOD").unwrap_or(defaults.bollinger_period),
            bollinger_k: env_parse::<f64>("BOLLINGER_K")
                .map(f64::abs)
                .unwrap_or(defaults.bollinger_k),
            ..defaults
        }
    }
}

/// Universe scanner configuration.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Symbols scanned on each run, in ranking tie-break order.
    pub symbols: Vec<String>,
    /// Maximum number of symbols fetched at once.
    pub concurrency: usize,
    /// Symbols with fewer bars than this are skipped.
    pub min_history: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_UNIVERSE.iter().map(|s| s.to_string()).collect(),
            concurrency: 4,
            min_history: 51,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// History window fetched per symbol.
    pub history_range: HistoryRange,
    /// Market data request timeout in seconds.
    pub provider_timeout_secs: u64,
    pub signals: SignalConfig,
    pub scan: ScanConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        // Format: "AAPL,MSFT,NVDA"
        let symbols = env::var("SCAN_SYMBOLS")
            .ok()
            .map(|s| parse_symbols(&s))
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| ScanConfig::default().symbols);

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env_parse("PORT").unwrap_or(3001),
            history_range: env::var("HISTORY_RANGE")
                .ok()
                .and_then(|r| HistoryRange::from_str(&r))
                .unwrap_or_default(),
            provider_timeout_secs: env_parse("PROVIDER_TIMEOUT_SECS").unwrap_or(30),
            signals: SignalConfig::from_env(),
            scan: ScanConfig {
                symbols,
                concurrency: env_parse::<usize>("SCAN_CONCURRENCY")
                    .unwrap_or(4)
                    .max(1),
                min_history: env_parse("MIN_SCAN_HISTORY").unwrap_or(51),
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

/// Split a comma separated symbol list, dropping blanks and upper-casing.
pub fn parse_symbols(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_uppercase)
        .collect()
}
