use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lookback window requested from the market data provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum HistoryRange {
    #[serde(rename = "3mo")]
    ThreeMonths,
    #[serde(rename = "6mo")]
    #[default]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "2y")]
    TwoYears,
}

impl HistoryRange {
    /// Get the range from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "3mo" => Some(HistoryRange::ThreeMonths),
            "6mo" => Some(HistoryRange::SixMonths),
            "1y" => Some(HistoryRange::OneYear),
            "2y" => Some(HistoryRange::TwoYears),
            _ => None,
        }
    }

    /// Range string understood by the chart endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryRange::ThreeMonths => "3mo",
            HistoryRange::SixMonths => "6mo",
            HistoryRange::OneYear => "1y",
            HistoryRange::TwoYears => "2y",
        }
    }

    /// Approximate number of daily bars this range yields.
    pub fn trading_days(&self) -> usize {
        match self {
            HistoryRange::ThreeMonths => 63,
            HistoryRange::SixMonths => 126,
            HistoryRange::OneYear => 252,
            HistoryRange::TwoYears => 504,
        }
    }
}

/// Daily OHLCV bar.
///
/// Sequences are ordered oldest to newest with one bar per trading day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// Extract the close column from a bar sequence.
pub fn closes(points: &[PricePoint]) -> Vec<f64> {
    points.iter().map(|p| p.close).collect()
}

/// Current quote for a symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub symbol: String,
    /// Display name (company or fund name).
    pub name: String,
    pub price: f64,
    /// Percentage change from the previous close.
    pub change_percent: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_close: Option<f64>,
}

impl Quote {
    /// Build a quote, deriving the change percentage from the previous close.
    pub fn new(symbol: String, name: String, price: f64, previous_close: Option<f64>) -> Self {
        let change_percent = match previous_close {
            Some(prev) if prev != 0.0 => (price - prev) / prev * 100.0,
            _ => 0.0,
        };

        Self {
            symbol,
            name,
            price,
            change_percent,
            previous_close,
        }
    }
}
