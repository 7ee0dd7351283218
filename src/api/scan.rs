//! Universe scan endpoint.

use axum::{extract::State, routing::get, Json, Router};

use super::{ApiResponse, AppState};
use crate::sources::MarketDataProvider;
use crate::types::{ScanResult, ScanSummary};

pub fn router<P: MarketDataProvider + 'static>() -> Router<AppState<P>> {
    Router::new().route("/api/scan", get(run_scan::<P>))
}

/// Scan the configured universe and return actionable symbols, best first.
async fn run_scan<P: MarketDataProvider + 'static>(
    State(state): State<AppState<P>>,
) -> Json<ApiResponse<Vec<ScanResult>, ScanSummary>> {
    let report = state.scanner.scan().await;

    Json(ApiResponse {
        data: report.results,
        meta: report.summary,
    })
}
