// =============================================================================
// Yahoo Finance chart client — daily OHLCV history over REST
// =============================================================================
//
// Public endpoint, no authentication.  "No data" situations (unknown symbol,
// empty date range, a provider-side error object) are reported as an EMPTY
// series so the API layer can reject the request before the analysis pipeline
// runs; only transport and malformed-body failures surface as errors.
// =============================================================================

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveTime};
use tracing::{debug, instrument, warn};

use crate::market_data::{DailyBar, DailySeries};

/// REST client for a Yahoo-Finance-style chart endpoint.
#[derive(Clone)]
pub struct ChartClient {
    base_url: String,
    client: reqwest::Client,
}

impl ChartClient {
    /// Create a new client against `base_url`
    /// (e.g. `https://query1.finance.yahoo.com`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .user_agent("marketlens/0.1")
            .build()
            .expect("failed to build reqwest client");

        Self {
            base_url: base_url.into(),
            client,
        }
    }

    /// GET /v8/finance/chart/{symbol} — daily bars for `[start, end]`.
    ///
    /// Returns an empty series when the provider has no data for the symbol
    /// or range; the caller must check before invoking the pipeline.
    #[instrument(skip(self), name = "provider::daily_series")]
    pub async fn daily_series(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<DailySeries> {
        let period1 = start.and_time(NaiveTime::MIN).and_utc().timestamp();
        let period2 = end.and_time(NaiveTime::MIN).and_utc().timestamp();

        let url = format!(
            "{}/v8/finance/chart/{}?period1={}&period2={}&interval=1d",
            self.base_url, symbol, period1, period2
        );

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("chart request failed")?;

        let status = resp.status();
        let body: serde_json::Value = resp
            .json()
            .await
            .context("failed to parse chart response")?;

        // Yahoo reports unknown symbols as a 404 with an error object in the
        // body; treat that as "no data" rather than a hard failure.
        if !status.is_success() && !body["chart"]["error"].is_object() {
            anyhow::bail!("chart endpoint returned {}: {}", status, body);
        }

        let bars = parse_chart(&body)?;
        debug!(symbol, count = bars.len(), "daily bars fetched");
        Ok(DailySeries::from_bars(bars))
    }
}

/// Parse the chart payload into bars.
///
/// Payload shape:
///   chart.error                          — non-null on provider-side failure
///   chart.result[0].timestamp[]          — UNIX seconds per bar
///   chart.result[0].indicators.quote[0]  — open/high/low/close/volume arrays
///
/// Bars with a null close are skipped (halted days); other null fields
/// default to zero since the engine only reads the close column.
fn parse_chart(body: &serde_json::Value) -> Result<Vec<DailyBar>> {
    let chart = &body["chart"];

    if chart["error"].is_object() {
        warn!(error = %chart["error"], "provider reported an error — returning empty series");
        return Ok(Vec::new());
    }

    let Some(result) = chart["result"].get(0) else {
        return Ok(Vec::new());
    };

    let timestamps = match result["timestamp"].as_array() {
        Some(ts) if !ts.is_empty() => ts,
        _ => return Ok(Vec::new()),
    };

    let quote = &result["indicators"]["quote"][0];
    let closes = quote["close"]
        .as_array()
        .context("chart result missing close array")?;

    let column = |name: &str, i: usize| -> f64 {
        quote[name]
            .get(i)
            .and_then(serde_json::Value::as_f64)
            .unwrap_or(0.0)
    };

    let mut bars = Vec::with_capacity(timestamps.len());
    for (i, ts) in timestamps.iter().enumerate() {
        let Some(secs) = ts.as_i64() else {
            warn!(index = i, "skipping bar with malformed timestamp");
            continue;
        };
        let Some(close) = closes.get(i).and_then(serde_json::Value::as_f64) else {
            // Null close: no trade data for that date.
            continue;
        };
        let Some(dt) = DateTime::from_timestamp(secs, 0) else {
            warn!(index = i, secs, "skipping bar with out-of-range timestamp");
            continue;
        };

        bars.push(DailyBar {
            date: dt.date_naive(),
            open: column("open", i),
            high: column("high", i),
            low: column("low", i),
            close,
            volume: column("volume", i),
        });
    }

    Ok(bars)
}
