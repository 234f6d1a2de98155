use crate::{Document, DocumentStore, SetOptions, StoreError, StoreResult};

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use tokio::sync::RwLock;

type DocumentKey = (String, String);

/// Process-local document store for development and tests.
///
/// Clones share the same documents. Reads can be slowed per document id and
/// the whole store can be switched offline to simulate an unreachable backend.
#[derive(Clone, Default)]
pub struct InMemoryDocumentStore {
    inner: Arc<RwLock<StoreInner>>,
    offline: Arc<AtomicBool>,
}

#[derive(Default)]
struct StoreInner {
    documents: HashMap<DocumentKey, Document>,
    writes: HashMap<DocumentKey, usize>,
    read_delays: HashMap<String, Duration>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// While offline every operation fails with [`StoreError::Unavailable`].
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Delay every read of document `id` (in any collection) by `delay`.
    pub async fn set_read_delay(&self, id: &str, delay: Duration) {
        let mut inner = self.inner.write().await;
        inner.read_delays.insert(id.to_string(), delay);
    }

    /// Seed a document exactly as given, bypassing write accounting.
    pub async fn insert_raw(&self, collection: &str, id: &str, fields: Document) {
        let mut inner = self.inner.write().await;
        inner
            .documents
            .insert((collection.to_string(), id.to_string()), fields);
    }

    /// Current stored fields of a document
    pub async fn document(&self, collection: &str, id: &str) -> Option<Document> {
        let inner = self.inner.read().await;
        inner
            .documents
            .get(&(collection.to_string(), id.to_string()))
            .cloned()
    }

    /// Number of documents in a collection
    pub async fn count(&self, collection: &str) -> usize {
        let inner = self.inner.read().await;
        inner
            .documents
            .keys()
            .filter(|(stored_collection, _)| stored_collection == collection)
            .count()
    }

    /// Number of `set_document` calls that targeted a document
    pub async fn write_count(&self, collection: &str, id: &str) -> usize {
        let inner = self.inner.read().await;
        inner
            .writes
            .get(&(collection.to_string(), id.to_string()))
            .copied()
            .unwrap_or(0)
    }

    #[track_caller]
    fn ensure_online(&self) -> StoreResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::unavailable("in-memory store is offline"));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get_document(&self, collection: &str, id: &str) -> StoreResult<Option<Document>> {
        let delay = self.inner.read().await.read_delays.get(id).copied();
        if let Some(delay) = delay {
            debug!("Delaying read of {collection}/{id} by {delay:?}");
            tokio::time::sleep(delay).await;
        }

        self.ensure_online()?;

        Ok(self.document(collection, id).await)
    }

    async fn set_document(
        &self,
        collection: &str,
        id: &str,
        fields: Document,
        options: SetOptions,
    ) -> StoreResult<()> {
        self.ensure_online()?;

        let key = (collection.to_string(), id.to_string());
        let mut inner = self.inner.write().await;

        *inner.writes.entry(key.clone()).or_default() += 1;

        if options.merge
            && let Some(existing) = inner.documents.get_mut(&key)
        {
            existing.extend(fields);
            return Ok(());
        }

        inner.documents.insert(key, fields);
        Ok(())
    }
}
