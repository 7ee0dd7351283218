//! Signal store for computing single-symbol analyses.

use std::sync::Arc;

use tracing::debug;

use super::analyze;
use crate::config::SignalConfig;
use crate::error::{AppError, Result};
use crate::sources::MarketDataProvider;
use crate::types::{closes, Recommendation, SymbolAnalysis};

/// Computes indicator snapshots and recommendations on demand.
///
/// Nothing is cached: every call fetches fresh data from the provider.
pub struct SignalStore<P> {
    provider: Arc<P>,
    config: SignalConfig,
}

impl<P: MarketDataProvider> SignalStore<P> {
    /// Create a new signal store.
    pub fn new(provider: Arc<P>, config: SignalConfig) -> Arc<Self> {
        Arc::new(Self { provider, config })
    }

    /// Fetch quote and history for `symbol` and analyze it.
    pub async fn get_analysis(&self, symbol: &str) -> Result<SymbolAnalysis> {
        let symbol = symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(AppError::BadRequest("Symbol must not be empty".to_string()));
        }

        let (quote, history) = tokio::try_join!(
            self.provider.get_quote(&symbol),
            self.provider.get_history(&symbol)
        )?;

        if history.is_empty() {
            return Err(AppError::InsufficientHistory {
                symbol,
                have: 0,
                need: 1,
            });
        }

        if history.len() < self.config.sma_period {
            debug!(
                "Only {} bars for {}; indicators needing {} will be undefined",
                history.len(),
                symbol,
                self.config.sma_period
            );
        }

        let analysis = analyze(&closes(&history), quote.price, &self.config);

        debug!(
            "Computed {} ({}) for {} from {} bars",
            analysis.recommendation.signal.label(),
            analysis.recommendation.score,
            symbol,
            history.len()
        );

        Ok(SymbolAnalysis {
            symbol,
            name: quote.name,
            change_percent: quote.change_percent,
            history_points: history.len(),
            analysis,
            timestamp: chrono::Utc::now().timestamp_millis(),
        })
    }

    /// Recommendation only, without the indicator snapshot.
    pub async fn get_recommendation(&self, symbol: &str) -> Result<Recommendation> {
        Ok(self.get_analysis(symbol).await?.analysis.recommendation)
    }
}
