// =============================================================================
// REST API Endpoints — Axum 0.7
// =============================================================================
//
// All endpoints live under `/api/v1/`.  The service exposes a health check
// and a single one-shot analyze operation; charts are rendered client-side
// from the augmented rows, so there is no server-side plotting surface.
//
// CORS is configured permissively for development; tighten `allowed_origins`
// in production.
// =============================================================================

use std::sync::Arc;

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::analysis::{AnalysisFrame, ReportRow};
use crate::app_state::AppState;
use crate::types::{Recommendation, TrendSignal};

// =============================================================================
// Router construction
// =============================================================================

/// Build the full REST API router with CORS middleware and shared state.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/analyze", post(analyze))
        .layer(cors)
        .with_state(state)
}

// =============================================================================
// Error responses
// =============================================================================

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (status, Json(ErrorBody { error: message.into() })).into_response()
}

// =============================================================================
// Health
// =============================================================================

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    analyses_run: u64,
    server_time: i64,
}

async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        analyses_run: state.analyses_run(),
        server_time: chrono::Utc::now().timestamp_millis(),
    })
}

// =============================================================================
// Analyze
// =============================================================================

/// Request body for POST /api/v1/analyze.  Window overrides fall back to the
/// configured defaults when omitted.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub symbol: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[serde(default)]
    pub short_ma_window: Option<usize>,
    #[serde(default)]
    pub long_ma_window: Option<usize>,
    #[serde(default)]
    pub rsi_window: Option<usize>,
    #[serde(default)]
    pub macd_short_span: Option<usize>,
    #[serde(default)]
    pub macd_long_span: Option<usize>,
    #[serde(default)]
    pub macd_signal_span: Option<usize>,
}

#[derive(Serialize)]
struct AnalyzeResponse {
    symbol: String,
    rows: Vec<ReportRow>,
    last_signal: Option<TrendSignal>,
    recommendation: Recommendation,
    recommendation_text: String,
}

async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> axum::response::Response {
    let symbol = req.symbol.trim().to_uppercase();
    if symbol.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "symbol must not be empty");
    }
    if req.start >= req.end {
        return error_response(StatusCode::BAD_REQUEST, "start date must precede end date");
    }

    let defaults = state.runtime_config.read().indicators.clone();
    let short_ma = req.short_ma_window.unwrap_or(defaults.short_ma_window);
    let long_ma = req.long_ma_window.unwrap_or(defaults.long_ma_window);
    let rsi_window = req.rsi_window.unwrap_or(defaults.rsi_window);
    let macd_short = req.macd_short_span.unwrap_or(defaults.macd_short_span);
    let macd_long = req.macd_long_span.unwrap_or(defaults.macd_long_span);
    let macd_signal = req.macd_signal_span.unwrap_or(defaults.macd_signal_span);

    if short_ma == 0 || long_ma == 0 || rsi_window == 0
        || macd_short == 0 || macd_long == 0 || macd_signal == 0
    {
        return error_response(StatusCode::BAD_REQUEST, "window lengths must be positive");
    }

    // Series ingestion is the only fallible I/O; the pipeline itself is pure.
    let series = match state.provider.daily_series(&symbol, req.start, req.end).await {
        Ok(series) => series,
        Err(e) => {
            warn!(symbol = %symbol, error = %e, "market data fetch failed");
            return error_response(StatusCode::BAD_GATEWAY, format!("market data fetch failed: {e}"));
        }
    };

    // The empty-series check belongs here, before the engine runs.
    if series.is_empty() {
        return error_response(
            StatusCode::NOT_FOUND,
            format!("no data found for {symbol} in the given date range"),
        );
    }

    // Stage order: moving averages must precede signal derivation; RSI and
    // MACD are independent of both.
    let frame = AnalysisFrame::new(series)
        .add_moving_averages(short_ma, long_ma)
        .add_rsi(rsi_window)
        .add_macd(macd_short, macd_long, macd_signal);

    let frame = match frame.derive_signal() {
        Ok(frame) => frame,
        // Unreachable with the fixed stage order above; still surfaced
        // rather than swallowed.
        Err(e) => return error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };

    let recommendation = frame.recommendation();
    info!(
        symbol = %symbol,
        bars = frame.series().len(),
        recommendation = %recommendation,
        "analysis complete"
    );
    state.record_analysis();

    Json(AnalyzeResponse {
        symbol,
        last_signal: frame.last_signal(),
        recommendation,
        recommendation_text: recommendation.describe().to_string(),
        rows: frame.rows(),
    })
    .into_response()
}
