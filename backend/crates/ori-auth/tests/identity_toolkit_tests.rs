//! Integration tests for the REST identity provider using wiremock

use ori_auth::{
    IdentityProvider, IdentityToolkitProvider, IdpCredential, PersistedCredential, StaticIdpFlow,
    codes,
};
use ori_core::{AuthErrorKind, Identity};
use ori_db::IdTokenSource;

use std::sync::Arc;
use std::time::Duration;

use googletest::prelude::*;
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, method, path, query_param},
};

const API_KEY: &str = "test-api-key";

fn provider_for(server: &MockServer) -> IdentityToolkitProvider {
    IdentityToolkitProvider::new(&server.uri(), API_KEY, Duration::from_secs(5), None).unwrap()
}

fn error_body(message: &str) -> serde_json::Value {
    json!({ "error": { "code": 400, "message": message, "errors": [] } })
}

#[tokio::test]
async fn test_sign_up_success_stores_credential() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signUp"))
        .and(query_param("key", API_KEY))
        .and(body_partial_json(json!({
            "email": "ada@example.com",
            "returnSecureToken": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "identitytoolkit#SignupNewUserResponse",
            "idToken": "id-token-1",
            "email": "ada@example.com",
            "refreshToken": "refresh-1",
            "expiresIn": "3600",
            "localId": "uid-1"
        })))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let identity = provider
        .create_credential("ada@example.com", "hunter22")
        .await
        .unwrap();

    assert_eq!(identity.id, "uid-1");
    assert_eq!(identity.email.as_deref(), Some("ada@example.com"));
    assert_eq!(provider.id_token().as_deref(), Some("id-token-1"));
    let credential = provider.credential().unwrap();
    assert_eq!(credential.refresh_token.as_deref(), Some("refresh-1"));
}

#[tokio::test]
async fn test_sign_up_email_exists_maps_to_account_already_exists() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signUp"))
        .respond_with(ResponseTemplate::new(400).set_body_json(error_body("EMAIL_EXISTS")))
        .mount(&mock_server)
        .await;

    let err = provider_for(&mock_server)
        .create_credential("ada@example.com", "hunter22")
        .await
        .unwrap_err();

    assert_eq!(err.code, codes::EMAIL_ALREADY_IN_USE);
    assert_eq!(err.kind(), AuthErrorKind::AccountAlreadyExists);
}

#[tokio::test]
async fn test_sign_in_invalid_password_maps_to_invalid_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .respond_with(ResponseTemplate::new(400).set_body_json(error_body("INVALID_PASSWORD")))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let err = provider
        .authenticate_credential("a@b.com", "wrong")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), AuthErrorKind::InvalidCredentials);
    assert_eq!(err.kind().message(), "Incorrect password. Please try again.");
    assert!(provider.credential().is_none());
}

#[tokio::test]
async fn test_sign_in_publishes_auth_state() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "localId": "uid-1",
            "email": "a@b.com",
            "displayName": "Ada Lovelace",
            "idToken": "id-token-1",
            "registered": true,
            "refreshToken": "refresh-1",
            "expiresIn": "3600"
        })))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let mut subscription = provider.subscribe_to_auth_state();
    assert_that!(subscription.next().await, some(none()));

    provider
        .authenticate_credential("a@b.com", "hunter22")
        .await
        .unwrap();

    let state = subscription.next().await.unwrap().unwrap();
    assert_eq!(state.id, "uid-1");
    assert_eq!(state.display_name.as_deref(), Some("Ada Lovelace"));
}

#[tokio::test]
async fn test_api_key_error_maps_to_configuration_incomplete() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .respond_with(ResponseTemplate::new(400).set_body_json(error_body(
            "API key not valid. Please pass a valid API key.",
        )))
        .mount(&mock_server)
        .await;

    let err = provider_for(&mock_server)
        .authenticate_credential("a@b.com", "hunter22")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), AuthErrorKind::ConfigurationIncomplete);
}

#[tokio::test]
async fn test_unreachable_endpoint_maps_to_network_failure() {
    let provider =
        IdentityToolkitProvider::new("http://127.0.0.1:9", API_KEY, Duration::from_secs(2), None)
            .unwrap();

    let err = provider
        .authenticate_credential("a@b.com", "hunter22")
        .await
        .unwrap_err();

    assert_eq!(err.code, codes::NETWORK_REQUEST_FAILED);
    assert_eq!(err.kind(), AuthErrorKind::NetworkFailure);
}

#[tokio::test]
async fn given_success_status_with_unexpected_body_when_signing_in_then_internal_error() {
    // Given: A 200 whose body lacks every sign-in field
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "unexpected": true })))
        .mount(&mock_server)
        .await;
    let provider = provider_for(&mock_server);

    // When
    let err = provider
        .authenticate_credential("a@b.com", "hunter22")
        .await
        .unwrap_err();

    // Then: Reported as an unknown failure, not a network outage
    assert_that!(err.code, eq(codes::INTERNAL_ERROR));
    assert_that!(err.kind(), eq(AuthErrorKind::Unknown));
}

#[tokio::test]
async fn test_slow_response_maps_to_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&mock_server)
        .await;

    let provider = IdentityToolkitProvider::new(
        &mock_server.uri(),
        API_KEY,
        Duration::from_millis(200),
        None,
    )
    .unwrap();

    let err = provider
        .authenticate_credential("a@b.com", "hunter22")
        .await
        .unwrap_err();

    assert_eq!(err.code, codes::TIMEOUT);
    assert_eq!(err.kind(), AuthErrorKind::Unknown);
}

#[tokio::test]
async fn test_federated_sign_in_exchanges_idp_credential() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithIdp"))
        .and(body_partial_json(json!({
            "postBody": "id_token=google-token&providerId=google.com",
            "returnSecureToken": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "federatedId": "https://accounts.google.com/1234",
            "providerId": "google.com",
            "localId": "fed-1",
            "email": "grace@example.com",
            "displayName": "Grace Hopper",
            "idToken": "id-token-fed",
            "refreshToken": "refresh-fed",
            "expiresIn": "3600"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let flow = StaticIdpFlow::new(IdpCredential::from_id_token("google.com", "google-token"));
    let provider = provider_for(&mock_server).with_federated_flow(Arc::new(flow));

    let identity = provider.authenticate_federated().await.unwrap();

    assert_eq!(identity.id, "fed-1");
    assert_eq!(identity.display_name.as_deref(), Some("Grace Hopper"));
}

#[tokio::test]
async fn test_federated_need_confirmation_maps_to_provider_conflict() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithIdp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "localId": "fed-1",
            "email": "grace@example.com",
            "needConfirmation": true
        })))
        .mount(&mock_server)
        .await;

    let flow = StaticIdpFlow::new(IdpCredential::from_id_token("google.com", "google-token"));
    let provider = provider_for(&mock_server).with_federated_flow(Arc::new(flow));

    let err = provider.authenticate_federated().await.unwrap_err();

    assert_eq!(err.kind(), AuthErrorKind::ProviderAccountConflict);
    assert!(provider.credential().is_none());
}

#[tokio::test]
async fn test_federated_without_flow_is_configuration_incomplete() {
    let mock_server = MockServer::start().await;

    let err = provider_for(&mock_server)
        .authenticate_federated()
        .await
        .unwrap_err();

    assert_eq!(err.kind(), AuthErrorKind::ConfigurationIncomplete);
}

#[tokio::test]
async fn test_update_display_name_uses_current_id_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:update"))
        .and(body_partial_json(json!({
            "idToken": "id-token-1",
            "displayName": "Ada Lovelace"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "localId": "uid-1",
            "displayName": "Ada Lovelace"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let identity = Identity::new("uid-1").with_email("ada@example.com");
    let restored = PersistedCredential {
        identity: identity.clone(),
        id_token: "id-token-1".to_string(),
        refresh_token: None,
    };
    let provider =
        IdentityToolkitProvider::new(&mock_server.uri(), API_KEY, Duration::from_secs(5), Some(restored))
            .unwrap();

    provider
        .update_display_name(&identity, "Ada Lovelace")
        .await
        .unwrap();

    let credential = provider.credential().unwrap();
    assert_eq!(credential.identity.display_name.as_deref(), Some("Ada Lovelace"));
}

#[tokio::test]
async fn test_update_display_name_for_other_identity_fails() {
    let mock_server = MockServer::start().await;

    let err = provider_for(&mock_server)
        .update_display_name(&Identity::new("uid-1"), "Ada Lovelace")
        .await
        .unwrap_err();

    assert_eq!(err.code, codes::NO_CURRENT_USER);
}

#[tokio::test]
async fn test_restored_credential_is_initial_auth_state() {
    let mock_server = MockServer::start().await;
    let restored = PersistedCredential {
        identity: Identity::new("uid-1"),
        id_token: "id-token-1".to_string(),
        refresh_token: Some("refresh-1".to_string()),
    };

    let provider =
        IdentityToolkitProvider::new(&mock_server.uri(), API_KEY, Duration::from_secs(5), Some(restored))
            .unwrap();
    let mut subscription = provider.subscribe_to_auth_state();

    let initial = subscription.next().await.unwrap();
    assert_that!(initial.map(|i| i.id), some(eq("uid-1")));
    assert_eq!(provider.id_token().as_deref(), Some("id-token-1"));
}

#[tokio::test]
async fn test_sign_out_clears_credential_and_notifies() {
    let mock_server = MockServer::start().await;
    let restored = PersistedCredential {
        identity: Identity::new("uid-1"),
        id_token: "id-token-1".to_string(),
        refresh_token: None,
    };
    let provider =
        IdentityToolkitProvider::new(&mock_server.uri(), API_KEY, Duration::from_secs(5), Some(restored))
            .unwrap();
    let mut subscription = provider.subscribe_to_auth_state();
    subscription.next().await;

    provider.sign_out().await.unwrap();

    assert_that!(subscription.next().await, some(none()));
    assert!(provider.credential().is_none());
    assert!(provider.id_token().is_none());
}
