//! Yahoo Finance API client for quotes and daily history.
//!
//! Uses the unofficial chart endpoint, which carries both the bars and a
//! `meta` block with the current market price.

use chrono::{DateTime, NaiveDate};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::MarketDataProvider;
use crate::error::{AppError, Result};
use crate::types::{HistoryRange, PricePoint, Quote};

const CHART_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// Range used when only the quote is needed.
const QUOTE_RANGE: &str = "5d";

/// Yahoo Finance chart response.
#[derive(Debug, Deserialize)]
struct YahooChartResponse {
    chart: YahooChart,
}

#[derive(Debug, Deserialize)]
struct YahooChart {
    result: Option<Vec<YahooResult>>,
    error: Option<YahooError>,
}

#[derive(Debug, Deserialize)]
struct YahooError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct YahooResult {
    meta: YahooMeta,
    timestamp: Option<Vec<i64>>,
    indicators: YahooIndicators,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct YahooMeta {
    symbol: String,
    regular_market_price: Option<f64>,
    chart_previous_close: Option<f64>,
    previous_close: Option<f64>,
    short_name: Option<String>,
    long_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct YahooIndicators {
    quote: Vec<YahooQuote>,
}

#[derive(Debug, Deserialize)]
struct YahooQuote {
    open: Option<Vec<Option<f64>>>,
    high: Option<Vec<Option<f64>>>,
    low: Option<Vec<Option<f64>>>,
    close: Option<Vec<Option<f64>>>,
    volume: Option<Vec<Option<u64>>>,
}

/// Normalize symbol for Yahoo Finance API.
/// Yahoo uses hyphens instead of dots for share classes (e.g., BRK-B not BRK.B)
fn normalize_yahoo_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase().replace('.', "-")
}

fn bar_date(timestamp: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp(timestamp, 0).map(|dt| dt.date_naive())
}

impl YahooResult {
    /// Build bars, skipping any without a positive close.
    fn into_points(self) -> Result<Vec<PricePoint>> {
        let timestamps = self
            .timestamp
            .ok_or_else(|| AppError::ExternalApi("No timestamps in response".to_string()))?;

        let quote = self
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| AppError::ExternalApi("No quote data in response".to_string()))?;

        let opens = quote.open.unwrap_or_default();
        let highs = quote.high.unwrap_or_default();
        let lows = quote.low.unwrap_or_default();
        let closes = quote.close.unwrap_or_default();
        let volumes = quote.volume.unwrap_or_default();

        let mut points = Vec::with_capacity(timestamps.len());
        for (i, &timestamp) in timestamps.iter().enumerate() {
            let close = closes.get(i).copied().flatten().unwrap_or(0.0);
            if close <= 0.0 {
                continue;
            }
            let Some(date) = bar_date(timestamp) else {
                continue;
            };

            points.push(PricePoint {
                date,
                open: opens.get(i).copied().flatten().unwrap_or(close),
                high: highs.get(i).copied().flatten().unwrap_or(close),
                low: lows.get(i).copied().flatten().unwrap_or(close),
                close,
                volume: volumes.get(i).copied().flatten().unwrap_or(0) as f64,
            });
        }

        Ok(points)
    }
}

impl YahooMeta {
    fn into_quote(self) -> Result<Quote> {
        let price = self.regular_market_price.ok_or_else(|| {
            AppError::ExternalApi(format!("No market price for {}", self.symbol))
        })?;
        let name = self
            .long_name
            .or(self.short_name)
            .unwrap_or_else(|| self.symbol.clone());
        let previous_close = self.previous_close.or(self.chart_previous_close);

        Ok(Quote::new(self.symbol, name, price, previous_close))
    }
}

/// Yahoo Finance API client.
pub struct YahooFinanceClient {
    client: Client,
    history_range: HistoryRange,
}

impl YahooFinanceClient {
    /// Create a new Yahoo Finance client fetching `history_range` of daily bars.
    pub fn new(history_range: HistoryRange, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()?;

        Ok(Self {
            client,
            history_range,
        })
    }

    /// Fetch the daily chart for a symbol.
    ///
    /// - range: Time range ("5d", "3mo", "6mo", "1y", "2y", ...)
    async fn get_chart(&self, symbol: &str, range: &str) -> Result<YahooResult> {
        let yahoo_symbol = normalize_yahoo_symbol(symbol);
        let url = format!(
            "{}/{}?range={}&interval=1d&includePrePost=false",
            CHART_URL, yahoo_symbol, range
        );

        debug!("Fetching Yahoo Finance data: {}", url);

        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("Unknown symbol {}", symbol)));
        }
        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!(
                "API error: {}",
                response.status()
            )));
        }

        let data: YahooChartResponse = response.json().await?;
        first_result(data.chart)
    }
}

fn first_result(chart: YahooChart) -> Result<YahooResult> {
    if let Some(error) = chart.error {
        return Err(AppError::ExternalApi(format!(
            "Yahoo API error: {} - {}",
            error.code, error.description
        )));
    }

    chart
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| AppError::ExternalApi("Empty results array".to_string()))
}

impl MarketDataProvider for YahooFinanceClient {
    async fn get_quote(&self, symbol: &str) -> Result<Quote> {
        self.get_chart(symbol, QUOTE_RANGE).await?.meta.into_quote()
    }

    async fn get_history(&self, symbol: &str) -> Result<Vec<PricePoint>> {
        self.get_chart(symbol, self.history_range.as_str())
            .await?
            .into_points()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart(json: &str) -> YahooChart {
        serde_json::from_str::<YahooChartResponse>(json).unwrap().chart
    }

    // =========================================================================
    // normalize_yahoo_symbol Tests
    // =========================================================================

    #[test]
    fn test_normalize_yahoo_symbol_uppercase() {
        assert_eq!(normalize_yahoo_symbol("aapl"), "AAPL");
        assert_eq!(normalize_yahoo_symbol(" msft "), "MSFT");
    }

    #[test]
    fn test_normalize_yahoo_symbol_dots_to_hyphens() {
        assert_eq!(normalize_yahoo_symbol("BRK.B"), "BRK-B");
        assert_eq!(normalize_yahoo_symbol("brk.a"), "BRK-A");
    }

    // =========================================================================
    // Chart parsing Tests
    // =========================================================================

    #[test]
    fn test_points_skip_missing_close() {
        let chart = chart(
            r#"{"chart": {"result": [{
                "meta": {"symbol": "AAPL", "regularMarketPrice": 155.0},
                "timestamp": [1700000000, 1700086400, 1700172800],
                "indicators": {"quote": [{
                    "open": [150.0, null, 152.0],
                    "high": [155.0, null, 157.0],
                    "low": [148.0, null, 150.0],
                    "close": [153.0, null, 155.0],
                    "volume": [50000000, null, 52000000]
                }]}
            }], "error": null}}"#,
        );

        let points = first_result(chart).unwrap().into_points().unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].close, 153.0);
        assert_eq!(points[0].date, NaiveDate::from_ymd_opt(2023, 11, 14).unwrap());
        assert_eq!(points[1].volume, 52000000.0);
        assert!(points[0].date < points[1].date);
    }

    #[test]
    fn test_points_fill_missing_ohl_from_close() {
        let chart = chart(
            r#"{"chart": {"result": [{
                "meta": {"symbol": "SPY"},
                "timestamp": [1700000000],
                "indicators": {"quote": [{"close": [450.0]}]}
            }]}}"#,
        );

        let points = first_result(chart).unwrap().into_points().unwrap();
        assert_eq!(points[0].open, 450.0);
        assert_eq!(points[0].high, 450.0);
        assert_eq!(points[0].low, 450.0);
        assert_eq!(points[0].volume, 0.0);
    }

    #[test]
    fn test_chart_error_is_external_api_error() {
        let chart = chart(
            r#"{"chart": {"result": null, "error": {"code": "Not Found", "description": "No data"}}}"#,
        );

        let err = first_result(chart).unwrap_err();
        assert!(matches!(err, AppError::ExternalApi(msg) if msg.contains("Not Found")));
    }

    #[test]
    fn test_empty_results() {
        let chart = chart(r#"{"chart": {"result": []}}"#);
        assert!(first_result(chart).is_err());
    }

    // =========================================================================
    // Quote Tests
    // =========================================================================

    #[test]
    fn test_meta_into_quote() {
        let meta: YahooMeta = serde_json::from_str(
            r#"{
                "symbol": "AAPL",
                "regularMarketPrice": 153.0,
                "chartPreviousClose": 150.0,
                "shortName": "Apple Inc.",
                "longName": "Apple Inc. Common Stock"
            }"#,
        )
        .unwrap();

        let quote = meta.into_quote().unwrap();
        assert_eq!(quote.symbol, "AAPL");
        assert_eq!(quote.name, "Apple Inc. Common Stock");
        assert_eq!(quote.price, 153.0);
        assert!((quote.change_percent - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_meta_minimal_quote_uses_symbol_as_name() {
        let meta: YahooMeta =
            serde_json::from_str(r#"{"symbol": "MSFT", "regularMarketPrice": 410.5}"#).unwrap();

        let quote = meta.into_quote().unwrap();
        assert_eq!(quote.name, "MSFT");
        assert_eq!(quote.change_percent, 0.0);
        assert!(quote.previous_close.is_none());
    }

    #[test]
    fn test_meta_without_price_fails() {
        let meta: YahooMeta = serde_json::from_str(r#"{"symbol": "MSFT"}"#).unwrap();
        assert!(meta.into_quote().is_err());
    }

    // =========================================================================
    // YahooFinanceClient Tests
    // =========================================================================

    #[test]
    fn test_client_creation() {
        let client = YahooFinanceClient::new(HistoryRange::OneYear, 10).unwrap();
        assert_eq!(client.history_range, HistoryRange::OneYear);
    }
}
