//! REST client for the hosted document store.
//!
//! Documents live at
//! `{endpoint}/v1/projects/{project}/databases/{database}/documents/{collection}/{id}`.
//! Merges are a `PATCH` with one `updateMask.fieldPaths` entry per written field;
//! overwrites are a `PATCH` without a mask.

use crate::store::firestore_value::{decode_fields, encode_fields};
use crate::{Document, DocumentStore, SetOptions, StoreError, StoreResult};

use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::debug;
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde_json::{Value, json};

pub const DEFAULT_ENDPOINT: &str = "https://firestore.googleapis.com";
pub const DEFAULT_DATABASE: &str = "(default)";

/// Supplies the signed-in user's bearer token for store requests.
pub trait IdTokenSource: Send + Sync {
    fn id_token(&self) -> Option<String>;
}

pub struct FirestoreDocumentStore {
    pub endpoint: String,
    pub project_id: String,
    pub database: String,
    client: ReqwestClient,
    tokens: Option<Arc<dyn IdTokenSource>>,
}

impl FirestoreDocumentStore {
    /// Create a client for `project_id` against `endpoint` (trailing slash trimmed).
    pub fn new(endpoint: &str, project_id: &str, database: &str, timeout: Duration) -> StoreResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StoreError::unavailable(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            project_id: project_id.to_string(),
            database: database.to_string(),
            client,
            tokens: None,
        })
    }

    /// Attach the bearer token source used for every request
    pub fn with_token_source(mut self, tokens: Arc<dyn IdTokenSource>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    pub fn document_url(&self, collection: &str, id: &str) -> String {
        format!(
            "{}/v1/projects/{}/databases/{}/documents/{}/{}",
            self.endpoint, self.project_id, self.database, collection, id
        )
    }

    fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        let mut req = self.client.request(method, url);

        if let Some(token) = self.tokens.as_ref().and_then(|tokens| tokens.id_token()) {
            req = req.bearer_auth(token);
        }

        req
    }

    /// Map a non-success response to a store error
    #[track_caller]
    fn status_error(status: StatusCode, body: &Value) -> StoreError {
        let message = body
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
            .unwrap_or("no error message")
            .to_string();

        if status.is_server_error() {
            StoreError::Unavailable {
                message: format!("{status}: {message}"),
                location: ErrorLocation::from(Location::caller()),
            }
        } else {
            StoreError::Rejected {
                status: status.as_u16(),
                message,
                location: ErrorLocation::from(Location::caller()),
            }
        }
    }
}

#[async_trait]
impl DocumentStore for FirestoreDocumentStore {
    async fn get_document(&self, collection: &str, id: &str) -> StoreResult<Option<Document>> {
        let url = self.document_url(collection, id);
        debug!("GET document {collection}/{id}");

        let response = self.request(Method::GET, &url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let body: Value = response.json().await?;
        if !status.is_success() {
            return Err(Self::status_error(status, &body));
        }

        decode_fields(body.get("fields")).map(Some)
    }

    async fn set_document(
        &self,
        collection: &str,
        id: &str,
        fields: Document,
        options: SetOptions,
    ) -> StoreResult<()> {
        let url = self.document_url(collection, id);
        debug!(
            "PATCH document {collection}/{id} (merge: {}, fields: {})",
            options.merge,
            fields.len()
        );

        let mut req = self
            .request(Method::PATCH, &url)
            .json(&json!({ "fields": encode_fields(&fields)? }));

        if options.merge {
            let mask = fields
                .keys()
                .map(|name| ("updateMask.fieldPaths", name.as_str()))
                .collect::<Vec<_>>();
            req = req.query(&mask);
        }

        let response = req.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body: Value = response.json().await.unwrap_or(Value::Null);
        Err(Self::status_error(status, &body))
    }
}
