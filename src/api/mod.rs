pub mod health;
pub mod scan;
pub mod signals;

use std::sync::Arc;

use axum::Router;
use serde::Serialize;

use crate::config::Config;
use crate::services::{SignalStore, UniverseScanner};
use crate::sources::MarketDataProvider;

/// Application state shared across handlers.
pub struct AppState<P> {
    pub config: Arc<Config>,
    pub signal_store: Arc<SignalStore<P>>,
    pub scanner: Arc<UniverseScanner<P>>,
}

impl<P: MarketDataProvider + 'static> AppState<P> {
    /// Wire the store and scanner over a shared provider.
    pub fn new(config: Config, provider: Arc<P>) -> Self {
        let signal_store = SignalStore::new(Arc::clone(&provider), config.signals.clone());
        let scanner = UniverseScanner::new(provider, config.signals.clone(), config.scan.clone());

        Self {
            config: Arc::new(config),
            signal_store,
            scanner,
        }
    }
}

impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            signal_store: Arc::clone(&self.signal_store),
            scanner: Arc::clone(&self.scanner),
        }
    }
}

/// API response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T, M = ApiMeta> {
    pub data: T,
    pub meta: M,
}

#[derive(Debug, Serialize)]
pub struct ApiMeta {
    /// Unix timestamp (milliseconds) when the response was built.
    pub timestamp: i64,
}

impl<T> ApiResponse<T> {
    fn new(data: T) -> Self {
        Self {
            data,
            meta: ApiMeta {
                timestamp: chrono::Utc::now().timestamp_millis(),
            },
        }
    }
}

/// Create the API router.
pub fn router<P: MarketDataProvider + 'static>() -> Router<AppState<P>> {
    Router::new()
        .merge(health::router::<P>())
        .merge(scan::router::<P>())
        .nest("/api/signals", signals::router::<P>())
}
