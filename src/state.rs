use crate::config::{ApiKey, RelayConfig};
use crate::proxy::{CoinMarketCapClient, Upstream};
use std::sync::Arc;

/// Immutable after startup and shared by every request, so handlers never
/// take a lock.
pub struct AppState {
    pub api_key: Option<ApiKey>,
    pub upstream: Arc<dyn Upstream>,
}

impl AppState {
    pub fn new(config: &RelayConfig) -> Self {
        let upstream = CoinMarketCapClient::new(config.upstream_url.clone());
        Self::with_upstream(config.api_key.clone(), Arc::new(upstream))
    }

    pub fn with_upstream(api_key: Option<ApiKey>, upstream: Arc<dyn Upstream>) -> Self {
        Self { api_key, upstream }
    }
}
