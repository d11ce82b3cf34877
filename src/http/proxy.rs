//! Metadata proxy handler.
//!
//! Forwards a client-described query to the metadata API with the
//! server-held key injected, and translates the result:
//!
//! - upstream 2xx JSON passes through unmodified with 200
//! - upstream errors propagate their status inside a structured envelope
//! - a body without a usable `endpoint` is a 400

use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;

use crate::http::error::ApiError;
use crate::http::server::AppState;

/// `POST /api/tmdb-proxy`
///
/// Body: `{ "endpoint": "movie/popular", "params": { ... } }`. The params
/// map is forwarded verbatim (minus nulls); the endpoint is not inspected
/// or allow-listed. The only property enforced here is that the API key
/// stays server-side.
pub async fn tmdb_proxy(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let payload: Value = serde_json::from_slice(&body)?;

    let endpoint = payload
        .get("endpoint")
        .and_then(Value::as_str)
        .filter(|endpoint| !endpoint.is_empty())
        .ok_or(ApiError::MissingEndpoint)?;

    let params = payload.get("params").and_then(Value::as_object);

    let upstream = state.tmdb.fetch(endpoint, params).await?;

    Ok(Json(upstream).into_response())
}
