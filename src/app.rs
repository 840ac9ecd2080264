//! NodeX HTTP application wiring.
//!
//! # Purpose
//! Builds the Axum router, configures middleware, and defines the shared
//! application state injected into handlers.
//!
//! # Notes
//! This module centralizes route composition to keep `main` small and testable.
use crate::api;
use crate::api::openapi::ApiDoc;
use crate::api::types::FeatureFlags;
use crate::i18n::Lang;
use crate::observability;
use crate::service::EventMembershipService;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_opentelemetry::OpenTelemetrySpanExt;
use utoipa::OpenApi;

#[derive(Clone)]
pub struct AppState {
    pub service: EventMembershipService,
    pub api_version: String,
    pub default_lang: Lang,
    pub features: FeatureFlags,
    pub admin_token: Option<String>,
}

pub fn build_router(state: AppState) -> Router {
    let trace_layer =
        TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
            let parent = observability::trace_context_from_headers(request.headers());
            let span = tracing::info_span!(
                "http.request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version()
            );
            span.set_parent(parent);
            span
        });

    Router::new()
        .route(
            "/v1/system/info",
            axum::routing::get(api::system::system_info),
        )
        .route(
            "/v1/system/health",
            axum::routing::get(api::system::system_health),
        )
        .route("/v1/events", axum::routing::get(api::events::list_events))
        .route(
            "/v1/events/:event_id",
            axum::routing::get(api::events::get_event),
        )
        .route(
            "/v1/events/:event_id/join",
            axum::routing::post(api::events::join_event),
        )
        .route("/v1/users", axum::routing::post(api::users::register_user))
        .route(
            "/v1/users/:student_id",
            axum::routing::get(api::users::get_user),
        )
        .route(
            "/v1/reviews",
            axum::routing::get(api::reviews::list_reviews).post(api::reviews::create_review),
        )
        .route("/v1/visits", axum::routing::post(api::stats::record_visit))
        .route(
            "/v1/stats/visitors",
            axum::routing::get(api::stats::visitor_count),
        )
        .route(
            "/v1/stats/summary",
            axum::routing::get(api::stats::stats_summary),
        )
        .route(
            "/v1/admin/events",
            axum::routing::post(api::admin::create_event),
        )
        .route(
            "/v1/admin/events/seed",
            axum::routing::post(api::admin::seed_events),
        )
        .route(
            "/v1/admin/events/:event_id",
            axum::routing::delete(api::admin::delete_event),
        )
        .merge(
            utoipa_swagger_ui::SwaggerUi::new("/docs").url("/v1/openapi.json", ApiDoc::openapi()),
        )
        .layer(trace_layer)
        .with_state(state)
}
