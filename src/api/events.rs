//! Event API handlers.
//!
//! # Purpose
//! Event browsing plus the join endpoint, which maps every `JoinOutcome`
//! variant of the membership service to a distinct HTTP shape with a
//! localized message.
use crate::api::error::{
    ApiError, api_conflict, api_forbidden, api_not_found, api_store, api_validation_error,
};
use crate::api::types::{EventListResponse, EventSummary, JoinRequest, JoinResponse, LangQuery};
use crate::app::AppState;
use crate::i18n::text;
use crate::model::Event;
use crate::service::JoinOutcome;
use axum::Json;
use axum::extract::{Path, Query, State};

#[utoipa::path(
    get,
    path = "/v1/events",
    tag = "events",
    params(
        ("lang" = Option<String>, Query, description = "Title language, en or kr")
    ),
    responses(
        (status = 200, description = "List events", body = EventListResponse)
    )
)]
pub(crate) async fn list_events(
    Query(params): Query<LangQuery>,
    State(state): State<AppState>,
) -> Result<Json<EventListResponse>, ApiError> {
    let lang = params.lang.unwrap_or(state.default_lang);
    let events = state
        .service
        .list_events()
        .await
        .map_err(|err| api_store("failed to list events", &err))?;
    let items = events
        .iter()
        .map(|event| EventSummary::from_event(event, lang))
        .collect();
    Ok(Json(EventListResponse { items }))
}

#[utoipa::path(
    get,
    path = "/v1/events/{event_id}",
    tag = "events",
    params(
        ("event_id" = String, Path, description = "Event identifier")
    ),
    responses(
        (status = 200, description = "Event detail", body = Event),
        (status = 404, description = "Event not found", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn get_event(
    Path(event_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Event>, ApiError> {
    let event = state
        .service
        .get_event(&event_id)
        .await
        .map_err(|err| api_store("failed to load event", &err))?
        .ok_or_else(|| api_not_found("event not found"))?;
    Ok(Json(event))
}

#[utoipa::path(
    post,
    path = "/v1/events/{event_id}/join",
    tag = "events",
    params(
        ("event_id" = String, Path, description = "Event identifier"),
        ("lang" = Option<String>, Query, description = "Message language, en or kr")
    ),
    request_body = JoinRequest,
    responses(
        (status = 200, description = "Joined", body = JoinResponse),
        (status = 400, description = "Missing user name", body = crate::api::types::ErrorResponse),
        (status = 403, description = "User not registered", body = crate::api::types::ErrorResponse),
        (status = 404, description = "Event not found", body = crate::api::types::ErrorResponse),
        (status = 409, description = "Already joined or event full", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn join_event(
    Path(event_id): Path<String>,
    Query(params): Query<LangQuery>,
    State(state): State<AppState>,
    Json(body): Json<JoinRequest>,
) -> Result<Json<JoinResponse>, ApiError> {
    let lang = params.lang.unwrap_or(state.default_lang);
    if body.user_name.trim().is_empty() {
        return Err(api_validation_error("user_name is required"));
    }

    let outcome = state
        .service
        .join_event(body.user_name.trim(), &event_id)
        .await
        .map_err(|err| api_store("failed to join event", &err))?;

    // Every non-joined outcome carries its taxonomy code and a localized
    // message; the outcome code doubles as the message-catalog key.
    let code = outcome.code();
    match outcome {
        JoinOutcome::Joined(event) => Ok(Json(JoinResponse {
            result: code.to_string(),
            message: text(lang, "event_joined").to_string(),
            event,
        })),
        JoinOutcome::AlreadyJoined | JoinOutcome::EventFull => {
            Err(api_conflict(code, text(lang, code)))
        }
        JoinOutcome::EventNotFound => Err(api_not_found(text(lang, code))),
        JoinOutcome::UserNotRegistered => Err(api_forbidden(code, text(lang, code))),
    }
}
