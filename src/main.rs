//! APOD Viewer Server
//!
//! Run with: cargo run --bin apod
//!
//! # Configuration
//!
//! Loaded from `APOD_CONFIG`, `~/.config/apod/config.toml`,
//! `/etc/apod/config.toml` or `./config.toml`, then overridden by:
//! - `APOD_API_KEY`: Provider access key (default: DEMO_KEY)
//! - `APOD_ENDPOINT`: Provider endpoint
//! - `APOD_HOST` / `APOD_PORT`: Bind address (default: 0.0.0.0:8083)
//! - `APOD_LOG_LEVEL` / `APOD_LOG_FORMAT`: Logging
//! - `RUST_LOG`: Full filter override

use apod::api::{serve, AppState};
use apod::config::Config;
use apod::fetcher::ApodClient;
use apod::logging::LogTarget;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (config, report) = Config::load_default()?;
    apod::logging::init(&config.logging, LogTarget::Stdout)?;
    report.log();

    tracing::info!("Starting APOD viewer v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Provider endpoint: {}", config.apod.endpoint);
    if config.apod.uses_demo_key() {
        tracing::warn!("Using the shared DEMO_KEY; set APOD_API_KEY for a real rate limit");
    }

    let client = Arc::new(ApodClient::new(config.apod.clone())?);
    let state = AppState::new(client, config.server.clone());

    serve(state, &config.server).await?;

    tracing::info!("APOD viewer stopped");
    Ok(())
}
