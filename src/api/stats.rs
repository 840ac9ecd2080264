//! Visit and statistics API handlers.
use crate::api::error::{ApiError, api_store};
use crate::api::types::{DateQuery, StatsSummary, VisitResponse};
use crate::app::AppState;
use crate::service::today;
use axum::Json;
use axum::extract::{Query, State};

#[utoipa::path(
    post,
    path = "/v1/visits",
    tag = "stats",
    responses(
        (status = 200, description = "Visit recorded", body = VisitResponse)
    )
)]
/// Record one page visit against today's counter and return the new total.
pub(crate) async fn record_visit(
    State(state): State<AppState>,
) -> Result<Json<VisitResponse>, ApiError> {
    let count = state
        .service
        .record_visit()
        .await
        .map_err(|err| api_store("failed to record visit", &err))?;
    Ok(Json(VisitResponse {
        date: today(),
        count,
    }))
}

#[utoipa::path(
    get,
    path = "/v1/stats/visitors",
    tag = "stats",
    params(
        ("date" = Option<String>, Query, description = "Day to read, YYYY-MM-DD, defaults to today")
    ),
    responses(
        (status = 200, description = "Visitor count for one day", body = VisitResponse)
    )
)]
pub(crate) async fn visitor_count(
    Query(params): Query<DateQuery>,
    State(state): State<AppState>,
) -> Result<Json<VisitResponse>, ApiError> {
    let date = params.date.unwrap_or_else(today);
    let count = state
        .service
        .visitor_count(&date)
        .await
        .map_err(|err| api_store("failed to read visitor count", &err))?;
    Ok(Json(VisitResponse { date, count }))
}

#[utoipa::path(
    get,
    path = "/v1/stats/summary",
    tag = "stats",
    responses(
        (status = 200, description = "Dashboard summary", body = StatsSummary)
    )
)]
pub(crate) async fn stats_summary(
    State(state): State<AppState>,
) -> Result<Json<StatsSummary>, ApiError> {
    let date = today();
    let visitors_today = state
        .service
        .visitor_count(&date)
        .await
        .map_err(|err| api_store("failed to read visitor count", &err))?;
    let total_members = state
        .service
        .member_count()
        .await
        .map_err(|err| api_store("failed to count members", &err))?;
    let registrations_today = state
        .service
        .registrations_on(&date)
        .await
        .map_err(|err| api_store("failed to count registrations", &err))?;
    Ok(Json(StatsSummary {
        date,
        visitors_today,
        total_members,
        registrations_today,
    }))
}
