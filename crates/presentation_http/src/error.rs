//! API error handling
//!
//! Every error leaves the server as `{"error": "<message>"}` with a status
//! matching its category.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use integration_tfnsw::TfnswError;
use serde::Serialize;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or invalid request parameter
    #[error("{0}")]
    BadRequest(String),

    /// Any failure of the upstream departure-monitor call
    #[error("{0}")]
    Upstream(#[from] TfnswError),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl ApiError {
    /// HTTP status for this error
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };

        (self.status(), Json(body)).into_response()
    }
}
