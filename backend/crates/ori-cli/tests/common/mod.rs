#![allow(dead_code)]

use ori_auth::PersistedCredential;
use ori_cli::{App, SessionFile};
use ori_config::Config;
use ori_core::Identity;

use std::path::PathBuf;

use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::MockServer;

pub const API_KEY: &str = "test-api-key";
pub const PROJECT_ID: &str = "test-project";
pub const DOC_PATH: &str = "/v1/projects/test-project/databases/test-db/documents/users/uid-1";

/// Config pointing both backends at the mock server
pub fn create_test_config(server: &MockServer) -> Config {
    let mut config = Config::default();
    config.identity.api_key = Some(API_KEY.to_string());
    config.identity.endpoint = server.uri();
    config.store.project_id = Some(PROJECT_ID.to_string());
    config.store.database = "test-db".to_string();
    config.store.endpoint = server.uri();
    config.http.timeout_secs = 5;
    config
}

pub fn session_path(temp: &TempDir) -> PathBuf {
    temp.path().join("session.json")
}

pub fn create_test_app(server: &MockServer, temp: &TempDir) -> App {
    App::build(&create_test_config(server), Some(session_path(temp)), None).unwrap()
}

pub fn create_test_credential() -> PersistedCredential {
    PersistedCredential {
        identity: Identity::new("uid-1").with_email("ada@example.com"),
        id_token: "id-token-1".to_string(),
        refresh_token: Some("refresh-1".to_string()),
    }
}

/// Store a credential as a previous run would have
pub fn write_session(temp: &TempDir) {
    SessionFile::new(session_path(temp))
        .save(Some(&create_test_credential()))
        .unwrap();
}

pub fn sign_in_response() -> Value {
    json!({
        "idToken": "id-token-1",
        "email": "ada@example.com",
        "refreshToken": "refresh-1",
        "expiresIn": "3600",
        "localId": "uid-1"
    })
}

pub fn profile_document() -> Value {
    json!({
        "name": "projects/test-project/databases/test-db/documents/users/uid-1",
        "fields": {
            "uid": { "stringValue": "uid-1" },
            "email": { "stringValue": "ada@example.com" },
            "firstName": { "stringValue": "Ada" },
            "lastName": { "stringValue": "Lovelace" },
            "company": { "stringValue": "Analytical" },
            "role": { "stringValue": "Founder" },
            "userType": { "stringValue": "startup" },
            "createdAt": { "timestampValue": "2024-03-15T09:30:00Z" },
            "lastLoginAt": { "timestampValue": "2024-03-16T10:00:00Z" }
        }
    })
}

pub fn error_body(message: &str) -> Value {
    json!({ "error": { "code": 400, "message": message, "errors": [] } })
}
