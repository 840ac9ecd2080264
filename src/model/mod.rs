//! Typed document models.
//!
//! # Purpose
//! The external database hands back untyped JSON objects; these structs give
//! every document an explicit shape with documented defaults, decoded once at
//! the store boundary instead of field-by-field lookups scattered through the
//! code.
mod event;
mod review;
mod user;

pub use event::{Event, ScheduleItem};
pub use review::Review;
pub use user::{JoinRecord, User};

use crate::store::Document;
use serde::Serialize;
use serde_json::Value;

/// Serialize a model into a store document.
///
/// Serialization of these plain data structs cannot fail; a non-object result
/// would mean the model itself is malformed, so it collapses to an empty
/// document rather than panicking in request paths.
pub fn as_document<T: Serialize>(value: &T) -> Document {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => map,
        _ => Document::new(),
    }
}
