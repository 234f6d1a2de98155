pub mod error;
pub mod repositories;
pub mod store;

pub use error::{RepositoryError, Result, StoreError, StoreResult};
pub use repositories::profile_repository::{ProfileRepository, USERS_COLLECTION};
pub use repositories::timestamp::normalize_timestamp;
pub use store::document_store::{DocumentStore, SetOptions};
pub use store::field_value::{Document, FieldValue, StoreTimestamp};
pub use store::firestore::{FirestoreDocumentStore, IdTokenSource};
pub use store::in_memory::InMemoryDocumentStore;

#[cfg(test)]
mod tests;
