// =============================================================================
// Daily price series — the single unit of data the analysis engine consumes
// =============================================================================
//
// Invariant: bars are keyed by trading date, unique and strictly increasing.
// The constructor enforces this by sorting and dropping duplicate dates, so
// every consumer may rely on monotonic order.  Calendar gaps (weekends,
// holidays) are permitted and never filled.
// =============================================================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One OHLCV bar for a single trading date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// An ordered daily price series for one instrument.
///
/// Indicator stages read the close column and attach derived columns aligned
/// to the same date index; they never mutate the bars themselves.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DailySeries {
    bars: Vec<DailyBar>,
}

impl DailySeries {
    /// Build a series from raw bars, restoring the date invariant.
    ///
    /// Bars are sorted by date; when two bars share a date the first one is
    /// kept and the duplicate dropped with a warning.
    pub fn from_bars(mut bars: Vec<DailyBar>) -> Self {
        bars.sort_by_key(|b| b.date);

        let before = bars.len();
        bars.dedup_by_key(|b| b.date);
        if bars.len() < before {
            warn!(dropped = before - bars.len(), "duplicate trading dates dropped");
        }

        Self { bars }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn bars(&self) -> &[DailyBar] {
        &self.bars
    }

    /// The close column, in date order.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }
}
