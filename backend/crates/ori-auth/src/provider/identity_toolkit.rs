//! REST client for the hosted identity toolkit.
//!
//! All calls are `POST {endpoint}/v1/accounts:{method}?key={api_key}` with a
//! JSON body. The signed-in credential is held in memory, exposed as the bearer
//! token for document store requests, and can be exported for persistence.

use crate::{
    AuthStateNotifier, AuthStateSubscription, FederatedFlow, IdentityProvider, ProviderError,
    ProviderResult, code_for_rest_message, codes,
};

use ori_core::Identity;
use ori_db::IdTokenSource;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Value, json};

pub const DEFAULT_ENDPOINT: &str = "https://identitytoolkit.googleapis.com";
pub const DEFAULT_REQUEST_URI: &str = "http://localhost";

/// Signed-in credential that can be written to disk and restored later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedCredential {
    pub identity: Identity,
    pub id_token: String,
    pub refresh_token: Option<String>,
}

/// Subset of the toolkit's sign-in responses used here
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    local_id: String,
    email: Option<String>,
    display_name: Option<String>,
    id_token: Option<String>,
    refresh_token: Option<String>,
    #[serde(default)]
    need_confirmation: bool,
}

pub struct IdentityToolkitProvider {
    endpoint: String,
    api_key: String,
    request_uri: String,
    client: ReqwestClient,
    federated: Option<Arc<dyn FederatedFlow>>,
    credential: Mutex<Option<PersistedCredential>>,
    notifier: AuthStateNotifier,
}

impl IdentityToolkitProvider {
    /// Create a provider. A restored credential becomes the initial auth
    /// state; without one the initial state is signed out.
    pub fn new(
        endpoint: &str,
        api_key: &str,
        timeout: Duration,
        restored: Option<PersistedCredential>,
    ) -> ProviderResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(ProviderError::from_reqwest)?;

        let notifier = AuthStateNotifier::new();
        notifier.publish(restored.as_ref().map(|c| c.identity.clone()));

        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            request_uri: DEFAULT_REQUEST_URI.to_string(),
            client,
            federated: None,
            credential: Mutex::new(restored),
            notifier,
        })
    }

    pub fn with_federated_flow(mut self, flow: Arc<dyn FederatedFlow>) -> Self {
        self.federated = Some(flow);
        self
    }

    /// `requestUri` sent with IdP sign-ins
    pub fn with_request_uri(mut self, request_uri: &str) -> Self {
        self.request_uri = request_uri.to_string();
        self
    }

    /// Current credential for persistence, `None` when signed out
    pub fn credential(&self) -> Option<PersistedCredential> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Option<PersistedCredential>> {
        self.credential.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn url(&self, method: &str) -> String {
        format!("{}/v1/accounts:{}", self.endpoint, method)
    }

    /// POST a request and decode the success body
    async fn call<T: DeserializeOwned>(&self, method: &str, body: Value) -> ProviderResult<T> {
        debug!("Identity toolkit accounts:{method}");

        let response = self
            .client
            .post(self.url(method))
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(ProviderError::from_reqwest)?;

        let status = response.status();
        if status.is_success() {
            return response.json().await.map_err(ProviderError::from_reqwest);
        }

        let body: Value = response.json().await.unwrap_or(Value::Null);
        let message = body
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
            .unwrap_or_default();

        warn!("accounts:{method} failed with {status}: {message}");
        Err(ProviderError::new(code_for_rest_message(message), message))
    }

    fn store_credential(&self, response: SignInResponse) -> Identity {
        let identity = Identity {
            id: response.local_id,
            email: response.email,
            display_name: response.display_name,
        };

        match response.id_token {
            Some(id_token) => {
                *self.lock() = Some(PersistedCredential {
                    identity: identity.clone(),
                    id_token,
                    refresh_token: response.refresh_token,
                });
            }
            None => warn!("Sign-in response for {} carried no id token", identity.id),
        }

        self.notifier.publish(Some(identity.clone()));
        identity
    }
}

impl IdTokenSource for IdentityToolkitProvider {
    fn id_token(&self) -> Option<String> {
        self.lock().as_ref().map(|c| c.id_token.clone())
    }
}

#[async_trait]
impl IdentityProvider for IdentityToolkitProvider {
    async fn create_credential(&self, email: &str, password: &str) -> ProviderResult<Identity> {
        let body = json!({ "email": email, "password": password, "returnSecureToken": true });
        let response: SignInResponse = self.call("signUp", body).await?;

        Ok(self.store_credential(response))
    }

    async fn authenticate_credential(
        &self,
        email: &str,
        password: &str,
    ) -> ProviderResult<Identity> {
        let body = json!({ "email": email, "password": password, "returnSecureToken": true });
        let response: SignInResponse = self.call("signInWithPassword", body).await?;

        Ok(self.store_credential(response))
    }

    async fn authenticate_federated(&self) -> ProviderResult<Identity> {
        let Some(flow) = &self.federated else {
            return Err(ProviderError::new(
                codes::OPERATION_NOT_ALLOWED,
                "no federated sign-in flow configured",
            ));
        };
        let credential = flow.obtain_credential().await?;

        let body = json!({
            "postBody": credential.post_body(),
            "requestUri": self.request_uri,
            "returnIdpCredential": true,
            "returnSecureToken": true,
        });
        let response: SignInResponse = self.call("signInWithIdp", body).await?;

        if response.need_confirmation {
            return Err(ProviderError::new(
                codes::ACCOUNT_EXISTS_WITH_DIFFERENT_CREDENTIAL,
                "account exists with a different sign-in method",
            ));
        }

        Ok(self.store_credential(response))
    }

    async fn update_display_name(
        &self,
        identity: &Identity,
        display_name: &str,
    ) -> ProviderResult<()> {
        let id_token = self
            .lock()
            .as_ref()
            .filter(|c| c.identity.id == identity.id)
            .map(|c| c.id_token.clone())
            .ok_or_else(|| ProviderError::new(codes::NO_CURRENT_USER, "identity is not signed in"))?;

        let body = json!({
            "idToken": id_token,
            "displayName": display_name,
            "returnSecureToken": false,
        });
        let _: Value = self.call("update", body).await?;

        if let Some(credential) = self.lock().as_mut() {
            credential.identity.display_name = Some(display_name.to_string());
        }
        Ok(())
    }

    async fn sign_out(&self) -> ProviderResult<()> {
        *self.lock() = None;
        self.notifier.publish(None);
        Ok(())
    }

    fn subscribe_to_auth_state(&self) -> AuthStateSubscription {
        self.notifier.subscribe()
    }
}
