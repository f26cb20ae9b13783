// =============================================================================
// Shared types for the marketlens analysis service
// =============================================================================

use serde::{Deserialize, Serialize};

/// Per-date trend signal: +1 when the short MA is above the long MA, -1 when
/// it is not.  The value 0 is reserved for a future "flat" state but is never
/// produced by the crossover rule.
pub type TrendSignal = i8;

pub const SIGNAL_BULLISH: TrendSignal = 1;
pub const SIGNAL_BEARISH: TrendSignal = -1;

/// The recommendation shown for the last date of an analysed series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Recommendation {
    Buy,
    Sell,
    Hold,
}

impl Recommendation {
    /// Map the last-row signal to a recommendation.  An undefined signal
    /// (series shorter than the long MA window) means there is no trend
    /// evidence either way, hence HOLD.
    pub fn from_signal(signal: Option<TrendSignal>) -> Self {
        match signal {
            Some(s) if s > 0 => Self::Buy,
            Some(_) => Self::Sell,
            None => Self::Hold,
        }
    }

    /// One-line explanation for the dashboard.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Buy => "Short MA is above Long MA.",
            Self::Sell => "Short MA is below Long MA.",
            Self::Hold => "No clear trend detected.",
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
            Self::Hold => write!(f, "HOLD"),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_mapping() {
        assert_eq!(Recommendation::from_signal(Some(SIGNAL_BULLISH)), Recommendation::Buy);
        assert_eq!(Recommendation::from_signal(Some(SIGNAL_BEARISH)), Recommendation::Sell);
        assert_eq!(Recommendation::from_signal(None), Recommendation::Hold);
    }

    #[test]
    fn display_is_uppercase() {
        assert_eq!(Recommendation::Buy.to_string(), "BUY");
        assert_eq!(Recommendation::Sell.to_string(), "SELL");
        assert_eq!(Recommendation::Hold.to_string(), "HOLD");
    }
}
