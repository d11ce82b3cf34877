//! HTTP error taxonomy.
//!
//! Every failure a handler can hit maps to exactly one variant here, and
//! every variant maps to one status code and one JSON body shape. Nothing
//! reaches the client as an unstructured error, and no variant ever
//! carries a server-held secret.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::tmdb::TmdbError;

/// Errors surfaced by the request handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Proxy request body parsed but carried no usable endpoint.
    #[error("Missing 'endpoint' parameter")]
    MissingEndpoint,

    /// Code-validation body parsed but `code` was absent or not a string.
    #[error("Invalid code format")]
    InvalidCodeFormat,

    /// Request used a verb outside the handler's accepted set.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The metadata API answered with a non-success status; its status and
    /// body text propagate to the caller so the failure is attributable
    /// upstream rather than to the proxy.
    #[error("TMDB API error: {status}")]
    Upstream { status: u16, message: String },

    /// Anything unexpected: malformed JSON body, transport failure,
    /// undecodable upstream body.
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::MissingEndpoint => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Missing 'endpoint' parameter" }),
            ),
            ApiError::InvalidCodeFormat => (
                StatusCode::BAD_REQUEST,
                json!({ "valid": false, "error": "Invalid code format" }),
            ),
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                json!({ "error": "Method not allowed" }),
            ),
            ApiError::Upstream { status, message } => (
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                json!({ "error": "TMDB API error", "status": status, "message": message }),
            ),
            ApiError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Internal server error", "message": message }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<TmdbError> for ApiError {
    fn from(err: TmdbError) -> Self {
        match err {
            TmdbError::Status { status, message } => ApiError::Upstream { status, message },
            other => ApiError::Internal(other.to_string()),
        }
    }
}
