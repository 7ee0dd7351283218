use serde::{Deserialize, Serialize};

/// Discrete recommendation class derived from the conviction score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignalClass {
    StrongSell,
    Sell,
    Hold,
    Buy,
    StrongBuy,
}

impl SignalClass {
    /// Get display label for this class.
    pub fn label(&self) -> &'static str {
        match self {
            SignalClass::StrongSell => "Strong Sell",
            SignalClass::Sell => "Sell",
            SignalClass::Hold => "Hold",
            SignalClass::Buy => "Buy",
            SignalClass::StrongBuy => "Strong Buy",
        }
    }

    /// Everything except `Hold` is worth acting on.
    pub fn is_actionable(&self) -> bool {
        !matches!(self, SignalClass::Hold)
    }
}

/// Scored recommendation for a single symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub signal: SignalClass,
    /// Conviction score, always within 0..=100.
    pub score: u8,
    /// Human-readable primary reason.
    pub reason: String,
}

/// Latest value of every indicator feeding the scorer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSnapshot {
    pub sma: Option<f64>,
    pub rsi: Option<f64>,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
    pub macd_histogram: Option<f64>,
    pub bollinger_upper: Option<f64>,
    pub bollinger_middle: Option<f64>,
    pub bollinger_lower: Option<f64>,
}

/// Indicator snapshot plus the recommendation scored from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub price: f64,
    pub indicators: IndicatorSnapshot,
    pub recommendation: Recommendation,
}

/// Analysis of a single symbol fetched through the market data provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolAnalysis {
    pub symbol: String,
    pub name: String,
    pub change_percent: f64,
    /// Number of daily bars the indicators were computed over.
    pub history_points: usize,
    #[serde(flatten)]
    pub analysis: Analysis,
    /// Unix timestamp (milliseconds) when computed.
    pub timestamp: i64,
}

/// A symbol kept by the universe scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change_percent: f64,
    pub recommendation: Recommendation,
}

/// Counters describing one scan run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanSummary {
    /// Symbols in the universe.
    pub scanned: usize,
    /// Symbols with an actionable signal.
    pub kept: usize,
    /// Symbols that scored `Hold`.
    pub held: usize,
    /// Symbols skipped for failed fetches or short history.
    pub skipped: usize,
    /// Unix timestamp (milliseconds) when the scan finished.
    pub scanned_at: i64,
}

/// Ranked scan results with their summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub results: Vec<ScanResult>,
    pub summary: ScanSummary,
}
