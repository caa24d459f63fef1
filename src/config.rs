//! Process configuration, loaded once at startup and never re-read.

use once_cell::sync::Lazy;
use std::fmt;
use std::net::SocketAddr;
use url::Url;

pub const API_KEY_ENV: &str = "CMC_API_KEY";
pub const LISTINGS_LATEST_URL: &str =
    "https://pro-api.coinmarketcap.com/v1/cryptocurrency/listings/latest";
pub const LISTEN_PORT: u16 = 3000;

static LISTINGS_LATEST: Lazy<Url> =
    Lazy::new(|| Url::parse(LISTINGS_LATEST_URL).expect("listings url constant is valid"));

/// CoinMarketCap API key. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Empty strings are treated as absent.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Clone, Debug)]
pub struct RelayConfig {
    pub api_key: Option<ApiKey>,
    pub upstream_url: Url,
}

impl RelayConfig {
    pub fn new(api_key: Option<ApiKey>) -> Self {
        Self {
            api_key,
            upstream_url: LISTINGS_LATEST.clone(),
        }
    }

    /// 从环境变量读取
    pub fn from_env() -> Self {
        Self::from_env_var(API_KEY_ENV)
    }

    fn from_env_var(name: &str) -> Self {
        Self::new(std::env::var(name).ok().and_then(ApiKey::new))
    }

    pub fn with_upstream_url(mut self, url: Url) -> Self {
        self.upstream_url = url;
        self
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], LISTEN_PORT))
    }
}

/// 加载当前目录 (或上级目录) 的 `.env` 文件, 已存在的环境变量优先
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!("loaded environment from {}", path.display()),
        Err(e) if e.not_found() => tracing::debug!("no .env file found"),
        Err(e) => tracing::warn!("failed to load .env file: {}", e),
    }
}
