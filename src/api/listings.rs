use axum::{
    extract::{RawQuery, State},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use crate::error::{RelayError, RelayResult};
use crate::proxy::{classify_upstream_error, QueryParams};
use crate::state::AppState;

/// Forwards one listings request to CoinMarketCap.
///
/// The key is checked on every call. The upstream body is returned as-is
/// whatever the upstream status was.
pub async fn relay_listings(state: &AppState, params: &QueryParams) -> RelayResult<Value> {
    let api_key = state.api_key.as_ref().ok_or(RelayError::MissingApiKey)?;

    state.upstream.fetch(api_key, params).await.map_err(|e| {
        tracing::error!(
            kind = classify_upstream_error(&e),
            "Error al obtener datos de CoinMarketCap: {}",
            e
        );
        RelayError::Upstream(e)
    })
}

/// GET /api/cryptocurrency/listings/latest
pub async fn get_listings_latest(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Response {
    let params = QueryParams::parse(query.as_deref());
    match relay_listings(&state, &params).await {
        Ok(data) => Json(data).into_response(),
        Err(e) => e.into_response(),
    }
}
