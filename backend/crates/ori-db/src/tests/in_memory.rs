use crate::{Document, DocumentStore, FieldValue, InMemoryDocumentStore, SetOptions, StoreError};

use googletest::prelude::*;

fn doc(pairs: &[(&str, &str)]) -> Document {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), FieldValue::from(*value)))
        .collect()
}

#[tokio::test]
async fn given_existing_document_when_merged_then_other_fields_survive() {
    // Given
    let store = InMemoryDocumentStore::new();
    store
        .set_document("users", "u1", doc(&[("a", "1"), ("b", "2")]), SetOptions::overwrite())
        .await
        .unwrap();

    // When
    store
        .set_document("users", "u1", doc(&[("b", "3")]), SetOptions::merge())
        .await
        .unwrap();

    // Then
    let stored = store.document("users", "u1").await.unwrap();
    assert_that!(stored, eq(&doc(&[("a", "1"), ("b", "3")])));
    assert_that!(store.write_count("users", "u1").await, eq(2));
}

#[tokio::test]
async fn given_existing_document_when_overwritten_then_old_fields_dropped() {
    let store = InMemoryDocumentStore::new();
    store
        .set_document("users", "u1", doc(&[("a", "1"), ("b", "2")]), SetOptions::overwrite())
        .await
        .unwrap();

    store
        .set_document("users", "u1", doc(&[("c", "3")]), SetOptions::overwrite())
        .await
        .unwrap();

    let stored = store.document("users", "u1").await.unwrap();
    assert_that!(stored, eq(&doc(&[("c", "3")])));
}

#[tokio::test]
async fn given_missing_document_when_merged_then_created_with_supplied_fields() {
    let store = InMemoryDocumentStore::new();

    store
        .set_document("users", "u1", doc(&[("b", "3")]), SetOptions::merge())
        .await
        .unwrap();

    assert_that!(store.count("users").await, eq(1));
}

#[tokio::test]
async fn given_offline_store_when_read_then_unavailable() {
    // Given
    let store = InMemoryDocumentStore::new();
    store.set_offline(true);

    // When
    let result = store.get_document("users", "u1").await;

    // Then
    assert!(matches!(result, Err(StoreError::Unavailable { .. })));
}

#[tokio::test]
async fn given_clones_when_one_writes_then_other_sees_document() {
    let store = InMemoryDocumentStore::new();
    let clone = store.clone();

    clone.insert_raw("users", "u1", doc(&[("a", "1")])).await;

    assert_that!(store.get_document("users", "u1").await.unwrap(), some(anything()));
    assert_that!(store.write_count("users", "u1").await, eq(0));
}
