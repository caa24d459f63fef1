use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

pub const MISSING_API_KEY_MESSAGE: &str = "Clave API no encontrada en las variables de entorno";
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Fallo al obtener datos de CoinMarketCap";

/// Both kinds surface to the caller as a 500 with a fixed message. The
/// underlying upstream error only reaches the operator log.
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("{}", MISSING_API_KEY_MESSAGE)]
    MissingApiKey,

    #[error("upstream request failed: {0}")]
    Upstream(#[source] reqwest::Error),
}

impl RelayError {
    /// Message returned to the caller.
    pub fn public_message(&self) -> &'static str {
        match self {
            RelayError::MissingApiKey => MISSING_API_KEY_MESSAGE,
            RelayError::Upstream(_) => UPSTREAM_FAILURE_MESSAGE,
        }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.public_message(),
        };
        (self.status(), Json(body)).into_response()
    }
}

pub type RelayResult<T> = Result<T, RelayError>;
