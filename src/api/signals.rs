//! Signal API endpoints.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use super::{ApiResponse, AppState};
use crate::error::Result;
use crate::sources::MarketDataProvider;
use crate::types::{Recommendation, SymbolAnalysis};

/// Create the signals router.
pub fn router<P: MarketDataProvider + 'static>() -> Router<AppState<P>> {
    Router::new()
        .route("/:symbol", get(get_analysis::<P>))
        .route("/:symbol/recommendation", get(get_recommendation::<P>))
}

/// Get the indicator snapshot and recommendation for a symbol.
async fn get_analysis<P: MarketDataProvider + 'static>(
    State(state): State<AppState<P>>,
    Path(symbol): Path<String>,
) -> Result<Json<ApiResponse<SymbolAnalysis>>> {
    let analysis = state.signal_store.get_analysis(&symbol).await?;
    Ok(Json(ApiResponse::new(analysis)))
}

/// Get only the recommendation for a symbol.
async fn get_recommendation<P: MarketDataProvider + 'static>(
    State(state): State<AppState<P>>,
    Path(symbol): Path<String>,
) -> Result<Json<ApiResponse<Recommendation>>> {
    let recommendation = state.signal_store.get_recommendation(&symbol).await?;
    Ok(Json(ApiResponse::new(recommendation)))
}
