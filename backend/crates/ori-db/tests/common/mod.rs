#![allow(dead_code)]

use ori_core::{ProfileFields, UserProfile, UserType};
use ori_db::{Document, FieldValue, InMemoryDocumentStore, ProfileRepository};

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

/// A repository over a fresh in-memory store. The store handle is returned
/// so tests can inspect raw documents.
pub fn create_test_repository() -> (ProfileRepository, InMemoryDocumentStore) {
    let store = InMemoryDocumentStore::new();
    let repo = ProfileRepository::new(Arc::new(store.clone()));
    (repo, store)
}

/// Fixed instant so timestamp assertions are exact
pub fn test_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap()
}

/// Creates a test UserProfile with sensible defaults
pub fn create_test_profile(id: &str) -> UserProfile {
    let fields = ProfileFields {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        company: Some("Analytical Engines".to_string()),
        role: Some("Founder".to_string()),
        user_type: UserType::Investor,
    };
    UserProfile::new(id, "ada@example.com", fields, test_instant())
}

/// Builds a document from `(name, value)` pairs
pub fn document(fields: Vec<(&str, FieldValue)>) -> Document {
    fields
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}
