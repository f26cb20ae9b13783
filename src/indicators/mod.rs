// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free implementations of the indicators used by the
// analysis engine.  Every output column is aligned 1:1 with its input series.
// A value that lacks enough history to be computed is an explicit `None`
// cell — never a NaN sentinel — so downstream comparisons are forced to
// handle the undefined case instead of silently comparing NaN.
//
// The EMA-based columns (MACD, signal line) are the one exception: the
// exponential recurrence is seeded at the first observation and is therefore
// defined at every index, early low-confidence values included.

pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;

pub use ema::ema;
pub use macd::macd;
pub use rsi::rsi;
pub use sma::rolling_mean;
