// =============================================================================
// marketlens — Main Entry Point
// =============================================================================
//
// A small trend-analysis service: fetch a daily price series for one symbol,
// run the indicator pipeline (SMA pair, RSI, MACD), and report a BUY / SELL /
// HOLD recommendation from the moving-average crossover at the last date.
// =============================================================================

// ── Module declarations ──────────────────────────────────────────────────────
mod analysis;
mod api;
mod app_state;
mod config;
mod indicators;
mod market_data;
mod provider;
mod types;

use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::app_state::AppState;
use crate::config::RuntimeConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── 1. Environment & config ──────────────────────────────────────────
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path =
        std::env::var("MARKETLENS_CONFIG").unwrap_or_else(|_| "marketlens.json".into());
    let mut config = RuntimeConfig::load(&config_path).unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        RuntimeConfig::default()
    });
    config.apply_env_overrides();

    info!(
        provider = %config.provider_url,
        short_ma = config.indicators.short_ma_window,
        long_ma = config.indicators.long_ma_window,
        "marketlens starting"
    );

    // ── 2. Shared state ──────────────────────────────────────────────────
    let bind_addr = config.bind_addr.clone();
    let state = Arc::new(AppState::new(config));

    // ── 3. REST API ──────────────────────────────────────────────────────
    let app = api::rest::router(state);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind API server on {bind_addr}"))?;
    info!(addr = %bind_addr, "API server listening");
    axum::serve(listener, app)
        .await
        .context("API server failed")?;

    Ok(())
}
