//! Document store abstraction.
//!
//! # Purpose
//! NodeX delegates all persistence to an external document database. This
//! module defines the `DocumentStore` trait the service layer programs
//! against, plus the backends shipped with the repo: an in-memory store for
//! development and tests, and a null store used when no backend is configured
//! so the app degrades to read-only empty data instead of failing startup.
//!
//! # Consistency
//! The store offers per-document atomicity only. `increment` is an atomic
//! numeric add; there is no multi-document transaction, so callers that write
//! two documents (the join workflow) get no cross-document guarantee.
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub mod memory;
pub mod null;

/// A stored document: a flat JSON object keyed by field name.
pub type Document = serde_json::Map<String, Value>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Generic key-addressed document store.
///
/// Semantics follow the external database NodeX targets:
/// - `set` is a full overwrite and creates the document if absent.
/// - `update` merges fields into an existing document and fails with
///   `NotFound` when the document does not exist.
/// - `increment` is an atomic add-to-field; a missing document or field is
///   treated as zero and created (upsert-with-merge semantics).
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get(&self, collection: &str, id: &str) -> StoreResult<Option<Document>>;
    async fn set(&self, collection: &str, id: &str, fields: Document) -> StoreResult<()>;
    async fn update(&self, collection: &str, id: &str, fields: Document) -> StoreResult<()>;
    async fn increment(
        &self,
        collection: &str,
        id: &str,
        field: &str,
        delta: i64,
    ) -> StoreResult<i64>;
    async fn query(
        &self,
        collection: &str,
        field: &str,
        equals: &Value,
    ) -> StoreResult<Vec<Document>>;
    async fn stream(&self, collection: &str) -> StoreResult<Vec<Document>>;
    async fn add(&self, collection: &str, fields: Document) -> StoreResult<String>;
    async fn delete(&self, collection: &str, id: &str) -> StoreResult<()>;

    async fn health_check(&self) -> StoreResult<()>;
    fn is_durable(&self) -> bool;
    fn backend_name(&self) -> &'static str;
}
