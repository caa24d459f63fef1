//! CoinMarketCap relay.
//!
//! Forwards `GET /api/cryptocurrency/listings/latest` to the CoinMarketCap
//! listings endpoint with the server-side API key attached, so browser
//! clients never see the key.

pub mod api;
pub mod config;
pub mod error;
pub mod proxy;
pub mod state;

#[cfg(test)]
pub(crate) mod testutils;
