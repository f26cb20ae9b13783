pub mod series;

// Re-export for convenient access (e.g. `use crate::market_data::DailySeries`).
pub use series::{DailyBar, DailySeries};
