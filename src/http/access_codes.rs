//! Access-code validation handlers.
//!
//! Two near-identical handlers, one per fixed secret: guest/demo access
//! and account creation. A well-formed wrong code is a successful request
//! (200 with `valid: false`); only a missing or non-string `code` is a
//! client error.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use subtle::ConstantTimeEq;

use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Outcome of a code comparison.
#[derive(Serialize)]
pub struct CodeValidation {
    pub valid: bool,
    pub message: &'static str,
}

/// `POST /api/verify-guest-code`
pub async fn verify_guest_code(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CodeValidation>, ApiError> {
    let submitted = parse_code(&body)?;
    Ok(Json(validate(
        &submitted,
        &state.access.guest_code,
        "Invalid access code",
    )))
}

/// `POST /api/verify-secret-code`
pub async fn verify_secret_code(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CodeValidation>, ApiError> {
    let submitted = parse_code(&body)?;
    Ok(Json(validate(
        &submitted,
        &state.access.signup_code,
        "Invalid secret code",
    )))
}

/// Extract `code` from a JSON body. Absent or non-string is a 400; an
/// unparseable body bubbles up as a 500 like any other unexpected failure.
fn parse_code(body: &[u8]) -> Result<String, ApiError> {
    let payload: Value = serde_json::from_slice(body)?;
    payload
        .get("code")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(ApiError::InvalidCodeFormat)
}

fn validate(submitted: &str, secret: &str, failure_message: &'static str) -> CodeValidation {
    if codes_match(submitted, secret) {
        CodeValidation {
            valid: true,
            message: "Valid code",
        }
    } else {
        CodeValidation {
            valid: false,
            message: failure_message,
        }
    }
}

/// Exact, case-sensitive equality in constant time. The length check is
/// not constant time; the codes' lengths are not secret.
fn codes_match(submitted: &str, secret: &str) -> bool {
    submitted.len() == secret.len()
        && bool::from(submitted.as_bytes().ct_eq(secret.as_bytes()))
}
