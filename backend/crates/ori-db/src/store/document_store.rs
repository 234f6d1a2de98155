use crate::{Document, StoreResult};

use async_trait::async_trait;

/// Write mode for [`DocumentStore::set_document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SetOptions {
    /// Only the supplied fields change; all other fields are left as stored.
    pub merge: bool,
}

impl SetOptions {
    pub fn merge() -> Self {
        Self { merge: true }
    }

    pub fn overwrite() -> Self {
        Self { merge: false }
    }
}

/// Remote document store boundary.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch a document. `Ok(None)` when it does not exist.
    async fn get_document(&self, collection: &str, id: &str) -> StoreResult<Option<Document>>;

    /// Write a document. A merge into a missing document creates it with just
    /// the supplied fields.
    async fn set_document(
        &self,
        collection: &str,
        id: &str,
        fields: Document,
        options: SetOptions,
    ) -> StoreResult<()>;
}
