//! Review API handlers.
use crate::api::error::{ApiError, api_store, api_validation_error};
use crate::api::types::{ReviewCreateRequest, ReviewListResponse};
use crate::app::AppState;
use crate::model::Review;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

#[utoipa::path(
    get,
    path = "/v1/reviews",
    tag = "reviews",
    responses(
        (status = 200, description = "List reviews", body = ReviewListResponse)
    )
)]
pub(crate) async fn list_reviews(
    State(state): State<AppState>,
) -> Result<Json<ReviewListResponse>, ApiError> {
    let items = state
        .service
        .list_reviews()
        .await
        .map_err(|err| api_store("failed to list reviews", &err))?;
    Ok(Json(ReviewListResponse { items }))
}

#[utoipa::path(
    post,
    path = "/v1/reviews",
    tag = "reviews",
    request_body = ReviewCreateRequest,
    responses(
        (status = 201, description = "Review stored", body = Review),
        (status = 400, description = "Invalid rating or missing user", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn create_review(
    State(state): State<AppState>,
    Json(body): Json<ReviewCreateRequest>,
) -> Result<(StatusCode, Json<Review>), ApiError> {
    if body.user.trim().is_empty() {
        return Err(api_validation_error("user is required"));
    }
    if !(1..=5).contains(&body.rating) {
        return Err(api_validation_error("rating must be between 1 and 5"));
    }

    let review = Review {
        id: String::new(),
        user: body.user.trim().to_string(),
        rating: body.rating,
        comment: body.comment,
        image: body.image,
    };
    let stored = state
        .service
        .add_review(review)
        .await
        .map_err(|err| api_store("failed to store review", &err))?;
    Ok((StatusCode::CREATED, Json(stored)))
}
