//! Liveness endpoint.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use super::AppState;
use crate::sources::MarketDataProvider;

/// Liveness plus the engine settings a caller needs to read scan results.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    /// Number of symbols in the scan universe.
    universe_size: usize,
    scan_concurrency: usize,
    /// Bars a symbol needs before the scanner will score it.
    min_scan_history: usize,
}

async fn health<P: MarketDataProvider + 'static>(
    State(state): State<AppState<P>>,
) -> Json<HealthResponse> {
    let scan = &state.config.scan;

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        universe_size: state.scanner.symbols().len(),
        scan_concurrency: scan.concurrency,
        min_scan_history: scan.min_history,
    })
}

pub fn router<P: MarketDataProvider + 'static>() -> Router<AppState<P>> {
    Router::new().route("/api/health", get(health::<P>))
}
