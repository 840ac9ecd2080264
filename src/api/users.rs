//! User API handlers.
//!
//! # Purpose
//! Registration and profile lookup. Registration writes the whole profile
//! document, so re-registering a student id replaces the previous profile
//! including its join history.
use crate::api::error::{ApiError, api_not_found, api_store, api_validation_error};
use crate::api::types::{LangQuery, RegisterRequest, RegisterResponse};
use crate::app::AppState;
use crate::i18n::text;
use crate::model::User;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

#[utoipa::path(
    post,
    path = "/v1/users",
    tag = "users",
    params(
        ("lang" = Option<String>, Query, description = "Message language, en or kr")
    ),
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Registered", body = RegisterResponse),
        (status = 400, description = "Missing name or student id", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn register_user(
    Query(params): Query<LangQuery>,
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let lang = params.lang.unwrap_or(state.default_lang);
    let name = body.name.trim();
    let student_id = body.student_id.trim();
    if name.is_empty() || student_id.is_empty() {
        return Err(api_validation_error("name and student_id are required"));
    }

    let user = state
        .service
        .register_user(name, student_id, body.email.trim(), None)
        .await
        .map_err(|err| api_store("failed to register user", &err))?;

    // The catalog entry already carries the trailing separator.
    let message = format!("{}{}", text(lang, "reg_success"), user.name);
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse { message, user }),
    ))
}

#[utoipa::path(
    get,
    path = "/v1/users/{student_id}",
    tag = "users",
    params(
        ("student_id" = String, Path, description = "Student identifier")
    ),
    responses(
        (status = 200, description = "User profile", body = User),
        (status = 404, description = "User not found", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn get_user(
    Path(student_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<User>, ApiError> {
    let user = state
        .service
        .get_user(&student_id)
        .await
        .map_err(|err| api_store("failed to load user", &err))?
        .ok_or_else(|| api_not_found("user not found"))?;
    Ok(Json(user))
}
