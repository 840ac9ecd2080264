//! Shared-secret guard for admin endpoints.
//!
//! # Purpose
//! Admin routes are protected by a single operator token supplied at startup.
//! When no token is configured the routes answer as if they did not exist.
use crate::api::error::{ApiError, api_not_enabled, api_unauthorized};
use crate::app::AppState;
use axum::http::HeaderMap;

pub const ADMIN_TOKEN_HEADER: &str = "X-NodeX-Admin-Token";

/// Check the admin token header against the configured secret.
///
/// # Errors
/// - 404 `not_enabled` when no admin token is configured.
/// - 401 `unauthorized` when the header is missing, unreadable, or wrong.
pub fn require_admin(state: &AppState, headers: &HeaderMap) -> Result<(), ApiError> {
    let expected = state
        .admin_token
        .as_ref()
        .ok_or_else(|| api_not_enabled("admin not enabled"))?;

    let token = match headers.get(ADMIN_TOKEN_HEADER) {
        Some(value) => value
            .to_str()
            .map_err(|_| api_unauthorized("invalid admin token"))?,
        None => return Err(api_unauthorized("missing admin token")),
    };

    if !constant_time_eq(token.as_bytes(), expected.as_bytes()) {
        return Err(api_unauthorized("invalid admin token"));
    }
    Ok(())
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (left, right) in a.iter().zip(b.iter()) {
        diff |= left ^ right;
    }
    diff == 0
}
