//! Request gate middleware.
//!
//! Normalizes cross-origin access and method restriction before any
//! handler-specific logic runs, identically for every API route:
//!
//! - every response carries the CORS headers the browser client expects
//! - `OPTIONS` preflights short-circuit with 204 and an empty body,
//!   touching neither the request body nor the upstream
//! - any verb other than `POST` is rejected with a 405 JSON envelope
//!
//! The gate also owns per-request metrics, since it is the one place that
//! sees every response with its final status.

use std::time::Instant;

use axum::extract::Request;
use axum::http::{header, HeaderMap, HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::http::error::ApiError;
use crate::observability::metrics;

/// Verbs the API routes accept, as advertised in preflight responses.
const ALLOWED_METHODS: &str = "POST, OPTIONS";

pub async fn request_gate(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    // Preflight: acknowledge with headers only, before any handler logic.
    if method == Method::OPTIONS {
        let mut response = StatusCode::NO_CONTENT.into_response();
        apply_cors(response.headers_mut());
        metrics::record_request(method.as_str(), 204, &path, start);
        return response;
    }

    if method != Method::POST {
        tracing::debug!(method = %method, path = %path, "Rejecting disallowed method");
        let mut response = ApiError::MethodNotAllowed.into_response();
        apply_cors(response.headers_mut());
        metrics::record_request(method.as_str(), 405, &path, start);
        return response;
    }

    let mut response = next.run(request).await;
    apply_cors(response.headers_mut());
    metrics::record_request(method.as_str(), response.status().as_u16(), &path, start);
    response
}

fn apply_cors(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
}
