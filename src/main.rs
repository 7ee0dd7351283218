use std::sync::Arc;

use signal_engine::api::{self, AppState};
use signal_engine::sources::YahooFinanceClient;
use signal_engine::Config;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "signal_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();
    info!("Starting signal engine on {}:{}", config.host, config.port);
    info!(
        "Scanning {} symbols with concurrency {}",
        config.scan.symbols.len(),
        config.scan.concurrency
    );

    let provider = Arc::new(YahooFinanceClient::new(
        config.history_range,
        config.provider_timeout_secs,
    )?);

    let addr = format!("{}:{}", config.host, config.port);
    let state = AppState::new(config, provider);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = api::router::<YahooFinanceClient>()
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
