use crate::ProviderResult;

use async_trait::async_trait;

/// Credential returned by a third-party identity provider, ready to be
/// exchanged for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdpCredential {
    pub provider_id: String,
    pub id_token: Option<String>,
    pub access_token: Option<String>,
}

impl IdpCredential {
    pub fn from_id_token(provider_id: &str, id_token: &str) -> Self {
        Self {
            provider_id: provider_id.to_string(),
            id_token: Some(id_token.to_string()),
            access_token: None,
        }
    }

    /// Form-encoded body for the IdP sign-in exchange
    pub fn post_body(&self) -> String {
        let mut parts = Vec::new();
        if let Some(token) = &self.id_token {
            parts.push(format!("id_token={token}"));
        }
        if let Some(token) = &self.access_token {
            parts.push(format!("access_token={token}"));
        }
        parts.push(format!("providerId={}", self.provider_id));
        parts.join("&")
    }
}

/// Interactive part of federated sign-in (browser popup, device flow, ...).
#[async_trait]
pub trait FederatedFlow: Send + Sync {
    async fn obtain_credential(&self) -> ProviderResult<IdpCredential>;
}

/// Flow that hands back a credential obtained out of band.
pub struct StaticIdpFlow {
    credential: IdpCredential,
}

impl StaticIdpFlow {
    pub fn new(credential: IdpCredential) -> Self {
        Self { credential }
    }
}

#[async_trait]
impl FederatedFlow for StaticIdpFlow {
    async fn obtain_credential(&self) -> ProviderResult<IdpCredential> {
        Ok(self.credential.clone())
    }
}
