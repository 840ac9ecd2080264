//! Admin API handlers.
//!
//! # Purpose
//! Privileged event management: create, delete, and seed the catalog with the
//! default lineup. Every handler runs behind the shared-secret admin guard.
use crate::api::error::{ApiError, api_store, api_validation_error};
use crate::api::types::{EventCreateRequest, SeedResponse};
use crate::app::AppState;
use crate::auth::admin::require_admin;
use crate::model::Event;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};

#[utoipa::path(
    post,
    path = "/v1/admin/events",
    tag = "admin",
    request_body = EventCreateRequest,
    responses(
        (status = 201, description = "Event created", body = Event),
        (status = 400, description = "Validation error", body = crate::api::types::ErrorResponse),
        (status = 401, description = "Unauthorized", body = crate::api::types::ErrorResponse),
        (status = 404, description = "Admin not enabled", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn create_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<EventCreateRequest>,
) -> Result<(StatusCode, Json<Event>), ApiError> {
    require_admin(&state, &headers)?;

    if body.title_en.trim().is_empty() {
        return Err(api_validation_error("title_en is required"));
    }
    if body.date.trim().is_empty() {
        return Err(api_validation_error("date is required"));
    }
    if body.max_participants == 0 {
        return Err(api_validation_error("max_participants must be positive"));
    }

    let event = Event {
        id: String::new(),
        title_en: body.title_en,
        title_kr: body.title_kr,
        date: body.date,
        location: body.location,
        image: body.image,
        duration_hours: body.duration_hours,
        current_participants: 0,
        max_participants: body.max_participants,
        participant_names: Vec::new(),
        schedule: body.schedule,
    };
    let created = state
        .service
        .create_event(event)
        .await
        .map_err(|err| api_store("failed to create event", &err))?;
    tracing::info!(event_id = %created.id, title = %created.title_en, "event created");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    delete,
    path = "/v1/admin/events/{event_id}",
    tag = "admin",
    params(
        ("event_id" = String, Path, description = "Event identifier")
    ),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 401, description = "Unauthorized", body = crate::api::types::ErrorResponse),
        (status = 404, description = "Event not found or admin not enabled", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn delete_event(
    Path(event_id): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    require_admin(&state, &headers)?;
    state
        .service
        .delete_event(&event_id)
        .await
        .map_err(|err| api_store("failed to delete event", &err))?;
    tracing::info!(event_id = %event_id, "event deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/v1/admin/events/seed",
    tag = "admin",
    responses(
        (status = 200, description = "Seed outcome", body = SeedResponse),
        (status = 401, description = "Unauthorized", body = crate::api::types::ErrorResponse),
        (status = 404, description = "Admin not enabled", body = crate::api::types::ErrorResponse)
    )
)]
/// Insert the default event lineup when the catalog is empty.
///
/// Idempotent: a non-empty catalog reports zero inserts and stays untouched.
pub(crate) async fn seed_events(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<SeedResponse>, ApiError> {
    require_admin(&state, &headers)?;
    let inserted = state
        .service
        .seed_events()
        .await
        .map_err(|err| api_store("failed to seed events", &err))?;
    if inserted > 0 {
        tracing::info!(inserted, "seeded default events");
    }
    Ok(Json(SeedResponse { inserted }))
}
