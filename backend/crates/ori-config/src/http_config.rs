use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_HTTP_TIMEOUT_SECS, MAX_HTTP_TIMEOUT_SECS,
    MIN_HTTP_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Whole-request timeout for the identity and store REST clients
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_HTTP_TIMEOUT_SECS..=MAX_HTTP_TIMEOUT_SECS).contains(&self.timeout_secs) {
            return Err(ConfigError::config(format!(
                "http.timeout_secs must be {}-{}, got {}",
                MIN_HTTP_TIMEOUT_SECS, MAX_HTTP_TIMEOUT_SECS, self.timeout_secs
            )));
        }
        Ok(())
    }
}
