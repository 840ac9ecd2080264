//! HTTP API request/response types.
//!
//! # Purpose
//! Shared payload shapes for the REST API and OpenAPI schema generation.
use crate::i18n::Lang;
use crate::model::{Event, Review, User};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct FeatureFlags {
    pub durable_storage: bool,
    pub admin_enabled: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct SystemInfo {
    pub api_version: String,
    pub storage_backend: String,
    pub default_lang: Lang,
    pub features: FeatureFlags,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct HealthStatus {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub request_id: Option<String>,
}

/// Language selector accepted by localizable endpoints (`?lang=en|kr`).
#[derive(Debug, Deserialize, Default)]
pub struct LangQuery {
    pub lang: Option<Lang>,
}

/// Event card for listings: localized title plus the fields the grid shows.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct EventSummary {
    pub id: String,
    pub title: String,
    pub date: String,
    pub location: String,
    pub image: String,
    pub current_participants: u32,
    pub max_participants: u32,
}

impl EventSummary {
    pub fn from_event(event: &Event, lang: Lang) -> Self {
        Self {
            id: event.id.clone(),
            title: event.title(lang).to_string(),
            date: event.date.clone(),
            location: event.location.clone(),
            image: event.image.clone(),
            current_participants: event.current_participants,
            max_participants: event.max_participants,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct EventListResponse {
    pub items: Vec<EventSummary>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct JoinRequest {
    pub user_name: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct JoinResponse {
    pub result: String,
    /// Localized confirmation text for the requested language.
    pub message: String,
    pub event: Event,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct RegisterRequest {
    pub name: String,
    pub student_id: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct RegisterResponse {
    pub message: String,
    pub user: User,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ReviewCreateRequest {
    pub user: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ReviewListResponse {
    pub items: Vec<Review>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct VisitResponse {
    pub date: String,
    pub count: i64,
}

#[derive(Debug, Deserialize, Default)]
pub struct DateQuery {
    pub date: Option<String>,
}

/// Dashboard numbers shown on the home page.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct StatsSummary {
    pub date: String,
    pub visitors_today: i64,
    pub total_members: usize,
    pub registrations_today: usize,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct EventCreateRequest {
    pub title_en: String,
    #[serde(default)]
    pub title_kr: String,
    pub date: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub duration_hours: u32,
    pub max_participants: u32,
    #[serde(default)]
    pub schedule: Vec<crate::model::ScheduleItem>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct SeedResponse {
    pub inserted: usize,
}
