pub mod document_store;
pub mod field_value;
pub mod firestore;
pub mod firestore_value;
pub mod in_memory;
