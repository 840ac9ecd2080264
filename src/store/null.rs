//! Null document store for unconfigured deployments.
//!
//! When no database is configured the app must stay navigable instead of
//! failing startup: every read answers with empty data, every write is
//! accepted and dropped. This mirrors the read-only fallback mode of the
//! original deployment when its credentials were missing.
use super::{Document, DocumentStore, StoreResult};
use async_trait::async_trait;
use serde_json::Value;

/// Store backend that holds nothing and persists nothing.
pub struct NullStore;

#[async_trait]
impl DocumentStore for NullStore {
    async fn get(&self, _collection: &str, _id: &str) -> StoreResult<Option<Document>> {
        Ok(None)
    }

    async fn set(&self, _collection: &str, _id: &str, _fields: Document) -> StoreResult<()> {
        Ok(())
    }

    async fn update(&self, _collection: &str, _id: &str, _fields: Document) -> StoreResult<()> {
        Ok(())
    }

    async fn increment(
        &self,
        _collection: &str,
        _id: &str,
        _field: &str,
        _delta: i64,
    ) -> StoreResult<i64> {
        Ok(0)
    }

    async fn query(
        &self,
        _collection: &str,
        _field: &str,
        _equals: &Value,
    ) -> StoreResult<Vec<Document>> {
        Ok(Vec::new())
    }

    async fn stream(&self, _collection: &str) -> StoreResult<Vec<Document>> {
        Ok(Vec::new())
    }

    async fn add(&self, _collection: &str, _fields: Document) -> StoreResult<String> {
        Ok(String::new())
    }

    async fn delete(&self, _collection: &str, _id: &str) -> StoreResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<()> {
        // The null store is reachable by definition; health reflects the
        // process, not a database that was never configured.
        Ok(())
    }

    fn is_durable(&self) -> bool {
        false
    }

    fn backend_name(&self) -> &'static str {
        "none"
    }
}
