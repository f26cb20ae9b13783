// =============================================================================
// Runtime Configuration — analysis defaults and service settings
// =============================================================================
//
// Every tunable lives here.  All fields carry `#[serde(default)]` so adding a
// field never breaks loading an older config file; environment variables
// override the file for deployment-specific settings.
// =============================================================================

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_bind_addr() -> String {
    "0.0.0.0:3001".to_string()
}

fn default_provider_url() -> String {
    "https://query1.finance.yahoo.com".to_string()
}

fn default_short_ma_window() -> usize {
    50
}

fn default_long_ma_window() -> usize {
    200
}

fn default_rsi_window() -> usize {
    14
}

fn default_macd_short_span() -> usize {
    12
}

fn default_macd_long_span() -> usize {
    26
}

fn default_macd_signal_span() -> usize {
    9
}

// =============================================================================
// IndicatorDefaults
// =============================================================================

/// Default window lengths for the indicator pipeline.  Individual analyze
/// requests may override any of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorDefaults {
    #[serde(default = "default_short_ma_window")]
    pub short_ma_window: usize,

    #[serde(default = "default_long_ma_window")]
    pub long_ma_window: usize,

    #[serde(default = "default_rsi_window")]
    pub rsi_window: usize,

    #[serde(default = "default_macd_short_span")]
    pub macd_short_span: usize,

    #[serde(default = "default_macd_long_span")]
    pub macd_long_span: usize,

    #[serde(default = "default_macd_signal_span")]
    pub macd_signal_span: usize,
}

impl Default for IndicatorDefaults {
    fn default() -> Self {
        Self {
            short_ma_window: default_short_ma_window(),
            long_ma_window: default_long_ma_window(),
            rsi_window: default_rsi_window(),
            macd_short_span: default_macd_short_span(),
            macd_long_span: default_macd_long_span(),
            macd_signal_span: default_macd_signal_span(),
        }
    }
}

// =============================================================================
// RuntimeConfig
// =============================================================================

/// Service-wide configuration loaded at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Address the REST API binds to.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Base URL of the market-data chart endpoint.
    #[serde(default = "default_provider_url")]
    pub provider_url: String,

    #[serde(default)]
    pub indicators: IndicatorDefaults,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            provider_url: default_provider_url(),
            indicators: IndicatorDefaults::default(),
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Apply environment-variable overrides (deployment settings win over
    /// the file).
    pub fn apply_env_overrides(&mut self) {
        if let Ok(addr) = std::env::var("MARKETLENS_BIND_ADDR") {
            self.bind_addr = addr;
        }
        if let Ok(url) = std::env::var("MARKETLENS_PROVIDER_URL") {
            self.provider_url = url;
        }
    }
}
