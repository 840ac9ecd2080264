//! In-memory implementation of the document store.
//!
//! # Purpose
//! Implements `DocumentStore` entirely in memory using `HashMap`s guarded by
//! `tokio::sync::RwLock`. It exists for:
//! - local development and tests (no external dependencies)
//! - deployments where durability is not required
//!
//! # Durability and consistency
//! - **Not durable**: all state is lost on process restart.
//! - **Single-process consistency**: reads take the read lock, mutations the
//!   write lock. `increment` performs its read-modify-write entirely under
//!   the write lock and is therefore atomic within the process, matching the
//!   atomic add-to-field primitive the external database offers.
//! - **No multi-node coordination**: multiple instances have independent
//!   state.
use super::{Document, DocumentStore, StoreError, StoreResult};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

type Collection = HashMap<String, Document>;

/// In-memory document store.
///
/// Collections are created lazily on first write; reading a collection that
/// was never written returns empty results rather than an error, which is the
/// behavior the service layer expects from the external database as well.
pub struct InMemoryStore {
    collections: Arc<RwLock<HashMap<String, Collection>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            collections: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    fn record_size_gauge(collection: &str, len: usize) {
        metrics::gauge!("nodex_documents_total", "collection" => collection.to_string())
            .set(len as f64);
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn get(&self, collection: &str, id: &str) -> StoreResult<Option<Document>> {
        let guard = self.collections.read().await;
        Ok(guard
            .get(collection)
            .and_then(|docs| docs.get(id))
            .cloned())
    }

    async fn set(&self, collection: &str, id: &str, fields: Document) -> StoreResult<()> {
        let mut guard = self.collections.write().await;
        let docs = guard.entry(collection.to_string()).or_default();
        docs.insert(id.to_string(), fields);
        Self::record_size_gauge(collection, docs.len());
        Ok(())
    }

    async fn update(&self, collection: &str, id: &str, fields: Document) -> StoreResult<()> {
        let mut guard = self.collections.write().await;
        let doc = guard
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(id))
            .ok_or_else(|| StoreError::NotFound(format!("{collection}/{id}")))?;
        for (key, value) in fields {
            doc.insert(key, value);
        }
        Ok(())
    }

    async fn increment(
        &self,
        collection: &str,
        id: &str,
        field: &str,
        delta: i64,
    ) -> StoreResult<i64> {
        // The whole read-modify-write happens under the write lock, so
        // concurrent increments serialize and none are lost.
        let mut guard = self.collections.write().await;
        let docs = guard.entry(collection.to_string()).or_default();
        let doc = docs.entry(id.to_string()).or_default();
        let current = doc.get(field).and_then(Value::as_i64).unwrap_or(0);
        let next = current + delta;
        doc.insert(field.to_string(), Value::from(next));
        Ok(next)
    }

    async fn query(
        &self,
        collection: &str,
        field: &str,
        equals: &Value,
    ) -> StoreResult<Vec<Document>> {
        let guard = self.collections.read().await;
        Ok(guard
            .get(collection)
            .map(|docs| {
                docs.values()
                    .filter(|doc| doc.get(field) == Some(equals))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn stream(&self, collection: &str) -> StoreResult<Vec<Document>> {
        let guard = self.collections.read().await;
        Ok(guard
            .get(collection)
            .map(|docs| docs.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn add(&self, collection: &str, mut fields: Document) -> StoreResult<String> {
        let id = uuid::Uuid::new_v4().to_string();
        // Stamp the generated id into the document so reads are self-describing.
        fields.insert("id".to_string(), Value::from(id.clone()));
        let mut guard = self.collections.write().await;
        let docs = guard.entry(collection.to_string()).or_default();
        docs.insert(id.clone(), fields);
        Self::record_size_gauge(collection, docs.len());
        Ok(id)
    }

    async fn delete(&self, collection: &str, id: &str) -> StoreResult<()> {
        let mut guard = self.collections.write().await;
        let docs = guard
            .get_mut(collection)
            .ok_or_else(|| StoreError::NotFound(format!("{collection}/{id}")))?;
        if docs.remove(id).is_none() {
            return Err(StoreError::NotFound(format!("{collection}/{id}")));
        }
        Self::record_size_gauge(collection, docs.len());
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<()> {
        // In-memory backend is always healthy if the process is running.
        Ok(())
    }

    fn is_durable(&self) -> bool {
        false
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
