use crate::identity_config::is_http_url;
use crate::{ConfigError, ConfigErrorResult, DEFAULT_STORE_DATABASE, DEFAULT_STORE_ENDPOINT};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub project_id: Option<String>,
    pub database: String,
    pub endpoint: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            project_id: None,
            database: String::from(DEFAULT_STORE_DATABASE),
            endpoint: String::from(DEFAULT_STORE_ENDPOINT),
        }
    }
}

impl StoreConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self
            .project_id
            .as_deref()
            .is_none_or(|project| project.trim().is_empty())
        {
            return Err(ConfigError::missing("store.project_id", "ORI_STORE_PROJECT_ID"));
        }

        if self.database.trim().is_empty() {
            return Err(ConfigError::store("store.database cannot be empty"));
        }

        if !is_http_url(&self.endpoint) {
            return Err(ConfigError::store(format!(
                "store.endpoint must be an http(s) URL, got '{}'",
                self.endpoint
            )));
        }

        Ok(())
    }
}
