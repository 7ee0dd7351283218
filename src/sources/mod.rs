//! Market data providers.

pub mod yahoo;

pub use yahoo::YahooFinanceClient;

use std::future::Future;

use crate::error::Result;
use crate::types::{PricePoint, Quote};

/// Source of quotes and daily history.
///
/// History must be ordered oldest to newest with `close` populated; the
/// signal engine does not re-validate ordering or duplicate dates.
pub trait MarketDataProvider: Send + Sync {
    /// Current quote for `symbol`.
    fn get_quote(&self, symbol: &str) -> impl Future<Output = Result<Quote>> + Send;

    /// Daily bars for `symbol` over the provider's configured lookback.
    fn get_history(&self, symbol: &str) -> impl Future<Output = Result<Vec<PricePoint>>> + Send;
}
