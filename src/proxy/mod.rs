// proxy 模块 - CoinMarketCap 上游转发

pub mod error_classifier;
pub mod query;
pub mod upstream;

pub use error_classifier::classify_upstream_error;
pub use query::QueryParams;
pub use upstream::{CoinMarketCapClient, Upstream, API_KEY_HEADER};
