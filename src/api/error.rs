//! API error types and helpers.
//!
//! # Purpose
//! Centralizes HTTP error response construction so every endpoint returns the
//! same `{code, message, request_id}` shape, and store failures translate to
//! HTTP statuses in exactly one place.
//!
//! # Security considerations
//! - Internal errors log details server-side but return generic messages.
use crate::api::types::ErrorResponse;
use crate::store::StoreError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;

/// Structured API error returned by handlers.
///
/// Couples an HTTP status code with a JSON error body; `status` must match
/// the semantics of `body.code`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self.body)).into_response()
    }
}

fn build(status: StatusCode, code: &str, message: &str) -> ApiError {
    ApiError {
        status,
        body: ErrorResponse {
            code: code.to_string(),
            message: message.to_string(),
            request_id: None,
        },
    }
}

pub fn api_not_found(message: &str) -> ApiError {
    build(StatusCode::NOT_FOUND, "not_found", message)
}

/// 404 with a `not_enabled` code for endpoints disabled by configuration,
/// so probes cannot distinguish "absent" from "switched off".
pub fn api_not_enabled(message: &str) -> ApiError {
    build(StatusCode::NOT_FOUND, "not_enabled", message)
}

/// 409 with a caller-provided conflict code for precise client handling.
pub fn api_conflict(code: &str, message: &str) -> ApiError {
    build(StatusCode::CONFLICT, code, message)
}

pub fn api_unauthorized(message: &str) -> ApiError {
    build(StatusCode::UNAUTHORIZED, "unauthorized", message)
}

pub fn api_forbidden(code: &str, message: &str) -> ApiError {
    build(StatusCode::FORBIDDEN, code, message)
}

pub fn api_validation_error(message: &str) -> ApiError {
    build(StatusCode::BAD_REQUEST, "validation_error", message)
}

pub fn api_internal_message(message: &str) -> ApiError {
    build(StatusCode::INTERNAL_SERVER_ERROR, "internal", message)
}

/// Translate a store failure: unavailable backends become 503, anything else
/// logs server-side and returns a generic 500.
pub fn api_store(message: &str, err: &StoreError) -> ApiError {
    match err {
        StoreError::Unavailable(_) => {
            tracing::warn!(error = %err, "document store unavailable");
            build(StatusCode::SERVICE_UNAVAILABLE, "store_unavailable", message)
        }
        StoreError::NotFound(what) => api_not_found(what),
        StoreError::Unexpected(_) => {
            tracing::error!(error = ?err, "document store error");
            build(StatusCode::INTERNAL_SERVER_ERROR, "internal", message)
        }
    }
}
