//! User model and join records.
use crate::store::Document;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// A registered member.
///
/// `id` is the externally supplied student identifier and doubles as the
/// document key, so re-registering the same id overwrites the whole record.
/// `joined_events` is only ever mutated by the join workflow.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Registration date, `YYYY-MM-DD`.
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub joined_events: Vec<JoinRecord>,
}

/// Denormalized cross-reference recorded on a user when they join an event.
///
/// Immutable once appended; at most one record per `event_id` per user.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct JoinRecord {
    pub event_id: String,
    /// Title snapshot taken at join time; later event edits do not update it.
    pub event_title: String,
    pub joined_at: String,
}

impl User {
    pub fn from_document(doc: Document) -> Result<Self, serde_json::Error> {
        serde_json::from_value(Value::Object(doc))
    }

    pub fn has_joined(&self, event_id: &str) -> bool {
        self.joined_events
            .iter()
            .any(|record| record.event_id == event_id)
    }
}
