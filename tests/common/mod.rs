//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use chrono::{Days, NaiveDate};
use signal_engine::{AppError, MarketDataProvider, PricePoint, Quote, Result};

/// Build daily bars from closes, one calendar day apart.
pub fn bars(closes: &[f64]) -> Vec<PricePoint> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PricePoint {
            date: start + Days::new(i as u64),
            open: close,
            high: close + 1.0,
            low: close - 1.0,
            close,
            volume: 1_000_000.0,
        })
        .collect()
}

/// Up 2, down 1, repeated, starting at 100. The last bar of an even-length
/// series is an up day.
pub fn zigzag_uptrend(count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| 100.0 + (i / 2) as f64 + if i % 2 == 1 { 2.0 } else { 0.0 })
        .collect()
}

/// Mirror image of `zigzag_uptrend` around 150.
pub fn zigzag_downtrend(count: usize) -> Vec<f64> {
    zigzag_uptrend(count).into_iter().map(|c| 300.0 - c).collect()
}

pub fn increasing(count: usize, start: f64) -> Vec<f64> {
    (0..count).map(|i| start + i as f64).collect()
}

pub fn decreasing(count: usize, start: f64) -> Vec<f64> {
    (0..count).map(|i| start - i as f64).collect()
}

struct MockSymbol {
    quote: Quote,
    history: Vec<PricePoint>,
}

/// In-memory market data provider.
#[derive(Default)]
pub struct MockProvider {
    symbols: HashMap<String, MockSymbol>,
    failing_quotes: HashSet<String>,
    failing_history: HashSet<String>,
    delays: HashMap<String, Duration>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a symbol whose quote price is its last close.
    pub fn with_series(self, symbol: &str, closes: &[f64]) -> Self {
        let price = closes.last().copied().unwrap_or(0.0);
        self.with_series_at(symbol, closes, price)
    }

    /// Register a symbol with an explicit quote price.
    pub fn with_series_at(mut self, symbol: &str, closes: &[f64], price: f64) -> Self {
        let previous_close = closes.len().checked_sub(2).map(|i| closes[i]);
        let quote = Quote::new(
            symbol.to_string(),
            format!("{} Corp", symbol),
            price,
            previous_close,
        );
        self.symbols.insert(
            symbol.to_string(),
            MockSymbol {
                quote,
                history: bars(closes),
            },
        );
        self
    }

    pub fn with_failing_quote(mut self, symbol: &str) -> Self {
        self.failing_quotes.insert(symbol.to_string());
        self
    }

    pub fn with_failing_history(mut self, symbol: &str) -> Self {
        self.failing_history.insert(symbol.to_string());
        self
    }

    pub fn with_delay(mut self, symbol: &str, delay: Duration) -> Self {
        self.delays.insert(symbol.to_string(), delay);
        self
    }

    /// Highest number of history requests observed running at once.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

impl MarketDataProvider for MockProvider {
    async fn get_quote(&self, symbol: &str) -> Result<Quote> {
        if self.failing_quotes.contains(symbol) {
            return Err(AppError::ExternalApi(format!("quote outage for {}", symbol)));
        }
        self.symbols
            .get(symbol)
            .map(|s| s.quote.clone())
            .ok_or_else(|| AppError::NotFound(symbol.to_string()))
    }

    async fn get_history(&self, symbol: &str) -> Result<Vec<PricePoint>> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some(delay) = self.delays.get(symbol) {
            tokio::time::sleep(*delay).await;
        }

        let result = if self.failing_history.contains(symbol) {
            Err(AppError::ExternalApi(format!("history outage for {}", symbol)))
        } else {
            self.symbols
                .get(symbol)
                .map(|s| s.history.clone())
                .ok_or_else(|| AppError::NotFound(symbol.to_string()))
        };

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }
}
