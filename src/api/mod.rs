use crate::state::AppState;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod common;
mod listings;

pub use listings::relay_listings;

pub const LISTINGS_LATEST_PATH: &str = "/api/cryptocurrency/listings/latest";

pub fn build_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route(LISTINGS_LATEST_PATH, get(listings::get_listings_latest))
        .with_state(state)
}

/// Routes plus CORS for any origin and request logging.
pub fn build_app(state: Arc<AppState>) -> Router {
    build_routes(state)
        .layer(CorsLayer::permissive())
        .layer(axum::middleware::from_fn(common::request_logger))
}
