//! Review model.
use crate::store::Document;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct Review {
    #[serde(default)]
    pub id: String,
    /// Display name of the author; reviews are not keyed by user id.
    pub user: String,
    /// Star rating, 1 through 5.
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub image: String,
}

impl Review {
    pub fn from_document(doc: Document) -> Result<Self, serde_json::Error> {
        serde_json::from_value(Value::Object(doc))
    }
}
