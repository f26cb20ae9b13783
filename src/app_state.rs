// =============================================================================
// Central Application State
// =============================================================================
//
// Shared across API handlers via `Arc<AppState>`.  The service is otherwise
// stateless: each analyze request fetches, computes, and discards its own
// series (no caching, no persistence), so the only shared pieces are the
// configuration, the provider client, and a request counter for the health
// endpoint.
// =============================================================================

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::config::RuntimeConfig;
use crate::provider::ChartClient;

pub struct AppState {
    pub runtime_config: RwLock<RuntimeConfig>,
    pub provider: ChartClient,
    /// Total analyze requests served since startup.
    analyses_run: AtomicU64,
}

impl AppState {
    pub fn new(config: RuntimeConfig) -> Self {
        let provider = ChartClient::new(config.provider_url.clone());
        Self {
            runtime_config: RwLock::new(config),
            provider,
            analyses_run: AtomicU64::new(0),
        }
    }

    pub fn record_analysis(&self) {
        self.analyses_run.fetch_add(1, Ordering::Relaxed);
    }

    pub fn analyses_run(&self) -> u64 {
        self.analyses_run.load(Ordering::Relaxed)
    }
}
