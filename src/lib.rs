//! Signal Engine - technical indicators, recommendation scoring and universe scanning

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod sources;
pub mod types;

// Re-export commonly used types
pub use config::{Config, ScanConfig, ScoringConfig, SignalConfig};
pub use error::{AppError, Result};
pub use services::{analyze, SignalStore, UniverseScanner};
pub use sources::MarketDataProvider;
pub use types::*;
