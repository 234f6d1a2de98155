use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_FEDERATED_PROVIDER_ID, DEFAULT_FEDERATED_REQUEST_URI,
    DEFAULT_IDENTITY_ENDPOINT,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// Web API key of the project. Never logged.
    pub api_key: Option<String>,
    pub endpoint: String,
    /// `requestUri` sent with federated sign-ins
    pub federated_request_uri: String,
    /// Provider id of the federated sign-in method, e.g. `google.com`
    pub federated_provider_id: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: String::from(DEFAULT_IDENTITY_ENDPOINT),
            federated_request_uri: String::from(DEFAULT_FEDERATED_REQUEST_URI),
            federated_provider_id: String::from(DEFAULT_FEDERATED_PROVIDER_ID),
        }
    }
}

impl IdentityConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.api_key.as_deref().is_none_or(|key| key.trim().is_empty()) {
            return Err(ConfigError::missing("identity.api_key", "ORI_IDENTITY_API_KEY"));
        }

        if !is_http_url(&self.endpoint) {
            return Err(ConfigError::identity(format!(
                "identity.endpoint must be an http(s) URL, got '{}'",
                self.endpoint
            )));
        }

        if self.federated_provider_id.trim().is_empty() {
            return Err(ConfigError::identity(
                "identity.federated_provider_id cannot be empty",
            ));
        }

        Ok(())
    }
}

pub(crate) fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}
