//! Universe scanner.
//!
//! Analyzes every symbol of a fixed universe, keeps the actionable ones and
//! ranks them by conviction score. Symbols are fetched concurrently, bounded
//! by the configured concurrency; a failure on one symbol only drops that
//! symbol from the results.

use std::sync::Arc;

use futures_util::future::join_all;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

use crate::config::{ScanConfig, SignalConfig};
use crate::error::{AppError, Result};
use crate::services::signals::analyze;
use crate::sources::MarketDataProvider;
use crate::types::{closes, ScanReport, ScanResult, ScanSummary};

/// What scanning a single symbol produced.
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolOutcome {
    /// Actionable signal, kept for ranking.
    Kept(ScanResult),
    /// Scored `Hold`, dropped.
    Held,
}

/// Scans a symbol universe and ranks actionable signals.
pub struct UniverseScanner<P> {
    provider: Arc<P>,
    signals: Arc<SignalConfig>,
    scan: ScanConfig,
}

impl<P: MarketDataProvider + 'static> UniverseScanner<P> {
    /// Create a new scanner.
    pub fn new(provider: Arc<P>, signals: SignalConfig, scan: ScanConfig) -> Arc<Self> {
        Arc::new(Self {
            provider,
            signals: Arc::new(signals),
            scan,
        })
    }

    /// Symbols scanned on each run.
    pub fn symbols(&self) -> &[String] {
        &self.scan.symbols
    }

    /// Scan the whole universe.
    ///
    /// Results are sorted by score descending once every symbol has finished;
    /// equal scores keep universe order.
    pub async fn scan(&self) -> ScanReport {
        let semaphore = Arc::new(Semaphore::new(self.scan.concurrency.max(1)));

        let tasks: Vec<_> = self
            .scan
            .symbols
            .iter()
            .map(|symbol| {
                let provider = Arc::clone(&self.provider);
                let signals = Arc::clone(&self.signals);
                let semaphore = Arc::clone(&semaphore);
                let symbol = symbol.clone();
                let min_history = self.scan.min_history;

                tokio::spawn(async move {
                    let _permit = semaphore.acquire_owned().await.ok()?;
                    match scan_symbol(provider.as_ref(), &symbol, &signals, min_history).await {
                        Ok(outcome) => Some(outcome),
                        Err(e) => {
                            warn!(symbol = %symbol, error = %e, "Skipping symbol in scan");
                            None
                        }
                    }
                })
            })
            .collect();

        let mut results = Vec::new();
        let mut held = 0;
        let mut skipped = 0;

        for (symbol, joined) in self.scan.symbols.iter().zip(join_all(tasks).await) {
            match joined {
                Ok(Some(SymbolOutcome::Kept(result))) => results.push(result),
                Ok(Some(SymbolOutcome::Held)) => held += 1,
                Ok(None) => skipped += 1,
                Err(e) => {
                    warn!(symbol = %symbol, error = %e, "Scan task failed");
                    skipped += 1;
                }
            }
        }

        rank(&mut results);

        let summary = ScanSummary {
            scanned: self.scan.symbols.len(),
            kept: results.len(),
            held,
            skipped,
            scanned_at: chrono::Utc::now().timestamp_millis(),
        };

        info!(
            scanned = summary.scanned,
            kept = summary.kept,
            held = summary.held,
            skipped = summary.skipped,
            "Universe scan complete"
        );

        ScanReport { results, summary }
    }
}

/// Fetch and score one symbol.
///
/// Fails when either fetch fails or history has fewer than `min_history`
/// bars; no partial result is produced in that case.
pub async fn scan_symbol<P: MarketDataProvider>(
    provider: &P,
    symbol: &str,
    signals: &SignalConfig,
    min_history: usize,
) -> Result<SymbolOutcome> {
    let quote = provider.get_quote(symbol).await?;
    let history = provider.get_history(symbol).await?;

    if history.len() < min_history {
        return Err(AppError::InsufficientHistory {
            symbol: symbol.to_string(),
            have: history.len(),
            need: min_history,
        });
    }

    let analysis = analyze(&closes(&history), quote.price, signals);
    let recommendation = analysis.recommendation;

    debug!(
        "Scanned {}: {} ({})",
        symbol,
        recommendation.signal.label(),
        recommendation.score
    );

    if !recommendation.signal.is_actionable() {
        return Ok(SymbolOutcome::Held);
    }

    Ok(SymbolOutcome::Kept(ScanResult {
        symbol: symbol.to_string(),
        name: quote.name,
        price: quote.price,
        change_percent: quote.change_percent,
        recommendation,
    }))
}

/// Sort by score descending. Stable, so ties keep their current order.
pub fn rank(results: &mut [ScanResult]) {
    results.sort_by(|a, b| b.recommendation.score.cmp(&a.recommendation.score));
}
