//! OpenAPI schema aggregation for the NodeX API.
//!
//! # Purpose
//! Collects all routes and schema types into a single OpenAPI document for docs
//! and client generation.
use crate::api::{
    admin, events, reviews, stats, system,
    types::{
        ErrorResponse, EventCreateRequest, EventListResponse, EventSummary, FeatureFlags,
        HealthStatus, JoinRequest, JoinResponse, RegisterRequest, RegisterResponse,
        ReviewCreateRequest, ReviewListResponse, SeedResponse, StatsSummary, SystemInfo,
        VisitResponse,
    },
    users,
};
use crate::i18n::Lang;
use crate::model::{Event, JoinRecord, Review, ScheduleItem, User};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "nodex",
        version = "v1",
        description = "NodeX community events HTTP API"
    ),
    paths(
        system::system_info,
        system::system_health,
        events::list_events,
        events::get_event,
        events::join_event,
        users::register_user,
        users::get_user,
        reviews::list_reviews,
        reviews::create_review,
        stats::record_visit,
        stats::visitor_count,
        stats::stats_summary,
        admin::create_event,
        admin::delete_event,
        admin::seed_events
    ),
    components(schemas(
        FeatureFlags,
        SystemInfo,
        HealthStatus,
        ErrorResponse,
        Lang,
        Event,
        ScheduleItem,
        EventSummary,
        EventListResponse,
        EventCreateRequest,
        JoinRequest,
        JoinResponse,
        User,
        JoinRecord,
        RegisterRequest,
        RegisterResponse,
        Review,
        ReviewCreateRequest,
        ReviewListResponse,
        VisitResponse,
        StatsSummary,
        SeedResponse
    )),
    tags(
        (name = "system", description = "System and discovery endpoints"),
        (name = "events", description = "Event browsing and joining"),
        (name = "users", description = "Registration and profiles"),
        (name = "reviews", description = "Event reviews"),
        (name = "stats", description = "Visits and dashboard statistics"),
        (name = "admin", description = "Privileged event management")
    )
)]
pub struct ApiDoc;
