//! Outbound side of the relay: one GET to CoinMarketCap per inbound request.

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use super::QueryParams;
use crate::config::ApiKey;

pub const API_KEY_HEADER: &str = "X-CMC_PRO_API_KEY";

/// Source of listings data.
///
/// Implementations return the upstream's parsed JSON body whatever its HTTP
/// status was. Only transport and decode failures are errors.
#[async_trait]
pub trait Upstream: Send + Sync {
    async fn fetch(&self, api_key: &ApiKey, params: &QueryParams) -> Result<Value, reqwest::Error>;
}

/// CoinMarketCap REST client.
pub struct CoinMarketCapClient {
    http: reqwest::Client,
    url: Url,
}

impl CoinMarketCapClient {
    /// Uses reqwest's default client settings, including its timeouts.
    pub fn new(url: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            url,
        }
    }
}

#[async_trait]
impl Upstream for CoinMarketCapClient {
    async fn fetch(&self, api_key: &ApiKey, params: &QueryParams) -> Result<Value, reqwest::Error> {
        // Raw query; escapes are forwarded without re-encoding.
        let mut url = self.url.clone();
        url.set_query(params.as_raw());

        let response = self
            .http
            .get(url)
            .header(API_KEY_HEADER, api_key.expose())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        // Status is not inspected; a 4xx/5xx JSON body is relayed as-is.
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%status, "upstream returned non-success status");
        }

        response.json::<Value>().await
    }
}
