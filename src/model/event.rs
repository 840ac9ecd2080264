//! Event model.
use crate::i18n::Lang;
use crate::store::Document;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// A community event with a bounded participant list.
///
/// Invariant after every successful join:
/// `0 <= current_participants <= max_participants`. The intended companion
/// invariant `participant_names.len() == current_participants` is not
/// atomically enforced by the store and can drift under concurrent writes.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct Event {
    #[serde(default)]
    pub id: String,
    pub title_en: String,
    #[serde(default)]
    pub title_kr: String,
    /// Event date, `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub duration_hours: u32,
    #[serde(default)]
    pub current_participants: u32,
    pub max_participants: u32,
    #[serde(default)]
    pub participant_names: Vec<String>,
    #[serde(default)]
    pub schedule: Vec<ScheduleItem>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ScheduleItem {
    pub time: String,
    pub activity_en: String,
    #[serde(default)]
    pub activity_kr: String,
}

impl Event {
    /// Decode a store document into a typed event.
    ///
    /// Admin-entered schedule data is the one field with a history of being
    /// malformed; it degrades to an empty schedule with a warning instead of
    /// rejecting the whole document.
    pub fn from_document(mut doc: Document) -> Result<Self, serde_json::Error> {
        let schedule = doc.remove("schedule").map(decode_schedule).unwrap_or_default();
        let mut event: Event = serde_json::from_value(Value::Object(doc))?;
        event.schedule = schedule;
        Ok(event)
    }

    pub fn title(&self, lang: Lang) -> &str {
        match lang {
            Lang::En => &self.title_en,
            // Fall back to the English title when no Korean one was entered.
            Lang::Kr if !self.title_kr.is_empty() => &self.title_kr,
            Lang::Kr => &self.title_en,
        }
    }

    pub fn is_full(&self) -> bool {
        self.current_participants >= self.max_participants
    }
}

fn decode_schedule(value: Value) -> Vec<ScheduleItem> {
    match serde_json::from_value(value) {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!(error = %err, "malformed event schedule, using empty default");
            Vec::new()
        }
    }
}
