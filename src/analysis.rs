// =============================================================================
// Analysis Engine — indicator pipeline over a single daily series
// =============================================================================
//
// The engine threads an `AnalysisFrame` through four stages:
//
//   add_moving_averages -> add_rsi -> add_macd -> derive_signal
//
// Each stage consumes the frame and returns it with new columns attached;
// columns are aligned 1:1 with the bar dates and are never mutated once
// computed.  RSI and MACD are independent of everything else; only
// derive_signal has a dependency (the moving-average columns), which it
// enforces as an explicit precondition instead of producing a bogus column.
//
// Undefined-cell policy for the signal column: when either moving average is
// still inside its warm-up window, the crossover comparison has no trend
// evidence, so the cell is `None`.  Defaulting those dates to -1 (as a naive
// numeric comparison would) manufactures SELL signals out of missing data.
// =============================================================================

use serde::Serialize;
use tracing::debug;

use crate::indicators::{macd, rolling_mean, rsi};
use crate::market_data::DailySeries;
use crate::types::{Recommendation, TrendSignal, SIGNAL_BEARISH, SIGNAL_BULLISH};

// =============================================================================
// Errors
// =============================================================================

/// A pipeline stage was invoked before the stage it depends on.
///
/// This is a programming error in the caller, not a data problem, so it is
/// surfaced immediately rather than smoothed over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreconditionError {
    missing: &'static str,
}

impl std::fmt::Display for PreconditionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "required column `{}` has not been computed", self.missing)
    }
}

impl std::error::Error for PreconditionError {}

// =============================================================================
// AnalysisFrame
// =============================================================================

/// A price series plus the derived columns attached so far.
///
/// Moving-average and RSI columns carry an explicit `None` per cell wherever
/// the defining window lacks history; the EMA-based MACD columns are defined
/// at every index by construction.
#[derive(Debug, Clone)]
pub struct AnalysisFrame {
    series: DailySeries,
    pub short_ma: Option<Vec<Option<f64>>>,
    pub long_ma: Option<Vec<Option<f64>>>,
    pub rsi: Option<Vec<Option<f64>>>,
    pub macd: Option<Vec<f64>>,
    pub signal_line: Option<Vec<f64>>,
    pub signal: Option<Vec<Option<TrendSignal>>>,
}

impl AnalysisFrame {
    pub fn new(series: DailySeries) -> Self {
        Self {
            series,
            short_ma: None,
            long_ma: None,
            rsi: None,
            macd: None,
            signal_line: None,
            signal: None,
        }
    }

    pub fn series(&self) -> &DailySeries {
        &self.series
    }

    // -------------------------------------------------------------------------
    // Pipeline stages
    // -------------------------------------------------------------------------

    /// Attach `short_ma` and `long_ma` (simple moving averages of close).
    ///
    /// A series shorter than a window yields an all-`None` column, never an
    /// error.  Windows must be positive (caller contract).
    pub fn add_moving_averages(mut self, short_window: usize, long_window: usize) -> Self {
        let closes = self.series.closes();
        self.short_ma = Some(rolling_mean(&closes, short_window));
        self.long_ma = Some(rolling_mean(&closes, long_window));
        debug!(short_window, long_window, "moving averages attached");
        self
    }

    /// Attach the `rsi` column.
    pub fn add_rsi(mut self, window: usize) -> Self {
        self.rsi = Some(rsi(&self.series.closes(), window));
        debug!(window, "rsi attached");
        self
    }

    /// Attach the `macd` and `signal_line` columns (defined at every index).
    pub fn add_macd(mut self, short_span: usize, long_span: usize, signal_span: usize) -> Self {
        let (macd_line, signal_line) = macd(&self.series.closes(), short_span, long_span, signal_span);
        self.macd = Some(macd_line);
        self.signal_line = Some(signal_line);
        debug!(short_span, long_span, signal_span, "macd attached");
        self
    }

    /// Attach the crossover `signal` column from the moving averages.
    ///
    /// Requires `add_moving_averages` to have run; fails with
    /// [`PreconditionError`] otherwise.  Cells where either average is still
    /// undefined stay `None`.
    pub fn derive_signal(mut self) -> Result<Self, PreconditionError> {
        let short = self
            .short_ma
            .as_ref()
            .ok_or(PreconditionError { missing: "short_ma" })?;
        let long = self
            .long_ma
            .as_ref()
            .ok_or(PreconditionError { missing: "long_ma" })?;

        let signal = short
            .iter()
            .zip(long)
            .map(|cells| match cells {
                (Some(s), Some(l)) if s > l => Some(SIGNAL_BULLISH),
                (Some(_), Some(_)) => Some(SIGNAL_BEARISH),
                _ => None,
            })
            .collect();

        self.signal = Some(signal);
        Ok(self)
    }

    // -------------------------------------------------------------------------
    // Outputs
    // -------------------------------------------------------------------------

    /// The signal at the last date, if the column exists and is defined there.
    pub fn last_signal(&self) -> Option<TrendSignal> {
        self.signal.as_ref()?.last().copied().flatten()
    }

    /// Recommendation for the last date of the series.
    pub fn recommendation(&self) -> Recommendation {
        Recommendation::from_signal(self.last_signal())
    }

    /// Flatten the frame into per-date rows for the presentation layer.
    /// Columns that were never computed serialize as `null` cells.
    pub fn rows(&self) -> Vec<ReportRow> {
        let cell = |col: &Option<Vec<Option<f64>>>, i: usize| col.as_ref().and_then(|c| c[i]);
        let dense = |col: &Option<Vec<f64>>, i: usize| col.as_ref().map(|c| c[i]);

        self.series
            .bars()
            .iter()
            .enumerate()
            .map(|(i, bar)| ReportRow {
                date: bar.date,
                open: bar.open,
                high: bar.high,
                low: bar.low,
                close: bar.close,
                volume: bar.volume,
                short_ma: cell(&self.short_ma, i),
                long_ma: cell(&self.long_ma, i),
                rsi: cell(&self.rsi, i),
                macd: dense(&self.macd, i),
                signal_line: dense(&self.signal_line, i),
                signal: self.signal.as_ref().and_then(|c| c[i]),
            })
            .collect()
    }
}

/// One fully augmented row of the analysis output.
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub date: chrono::NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub short_ma: Option<f64>,
    pub long_ma: Option<f64>,
    pub rsi: Option<f64>,
    pub macd: Option<f64>,
    pub signal_line: Option<f64>,
    pub signal: Option<TrendSignal>,
}
