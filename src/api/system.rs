//! System/health API handlers.
//!
//! # Purpose
//! Lightweight endpoints for service metadata and health probes.
use crate::api::error::{ApiError, api_store};
use crate::api::types::{HealthStatus, SystemInfo};
use crate::app::AppState;
use axum::Json;
use axum::extract::State;

#[utoipa::path(
    get,
    path = "/v1/system/info",
    tag = "system",
    responses(
        (status = 200, description = "Service identity and capabilities", body = SystemInfo)
    )
)]
/// Return service identity and feature flags.
///
/// # Errors
/// - Does not return errors.
pub(crate) async fn system_info(State(state): State<AppState>) -> Json<SystemInfo> {
    // Built from in-memory configuration, no I/O.
    Json(SystemInfo {
        api_version: state.api_version.clone(),
        storage_backend: state.service.store().backend_name().to_string(),
        default_lang: state.default_lang,
        features: state.features.clone(),
    })
}

#[utoipa::path(
    get,
    path = "/v1/system/health",
    tag = "system",
    responses(
        (status = 200, description = "Service health", body = HealthStatus)
    )
)]
/// Return health status, probing the backing store.
///
/// # Errors
/// - Returns 500/503 if the storage health check fails.
pub(crate) async fn system_health(
    State(state): State<AppState>,
) -> Result<Json<HealthStatus>, ApiError> {
    if let Err(err) = state.service.store().health_check().await {
        return Err(api_store("storage unavailable", &err));
    }
    Ok(Json(HealthStatus {
        status: "ok".to_string(),
    }))
}
