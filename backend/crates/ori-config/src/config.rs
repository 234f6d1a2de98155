use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIRECTORY,
    HttpConfig, IdentityConfig, LoggingConfig, SessionConfig, StoreConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub identity: IdentityConfig,
    pub store: StoreConfig,
    pub http: HttpConfig,
    pub logging: LoggingConfig,
    pub session: SessionConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for ORI_CONFIG_DIR env var, else use ./.ori/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply ORI_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: ORI_CONFIG_DIR env var > ./.ori/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIRECTORY))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.identity.validate()?;
        self.store.validate()?;
        self.http.validate()?;
        self.session.validate()?;

        Ok(())
    }

    /// Absolute path of the persisted session credential
    pub fn session_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.session.file))
    }

    /// Absolute path of the log file, if file logging is configured
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(filename) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(filename),
            )),
            None => Ok(None),
        }
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  identity: {} (api key {})",
            self.identity.endpoint,
            if self.identity.api_key.is_some() {
                "set"
            } else {
                "missing"
            }
        );
        info!(
            "  federated: provider={}, request_uri={}",
            self.identity.federated_provider_id, self.identity.federated_request_uri
        );
        info!(
            "  store: {} project={} database={}",
            self.store.endpoint,
            self.store.project_id.as_deref().unwrap_or("<missing>"),
            self.store.database
        );
        info!("  http: timeout={}s", self.http.timeout_secs);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!(
            "  session: {} ({})",
            if self.session.persist {
                "persisted"
            } else {
                "in-memory"
            },
            self.session.file
        );
    }

    fn apply_env_overrides(&mut self) {
        // Identity
        Self::apply_env_option_string("ORI_IDENTITY_API_KEY", &mut self.identity.api_key);
        Self::apply_env_string("ORI_IDENTITY_ENDPOINT", &mut self.identity.endpoint);
        Self::apply_env_string(
            "ORI_IDENTITY_FEDERATED_REQUEST_URI",
            &mut self.identity.federated_request_uri,
        );
        Self::apply_env_string(
            "ORI_IDENTITY_FEDERATED_PROVIDER_ID",
            &mut self.identity.federated_provider_id,
        );

        // Store
        Self::apply_env_option_string("ORI_STORE_PROJECT_ID", &mut self.store.project_id);
        Self::apply_env_string("ORI_STORE_DATABASE", &mut self.store.database);
        Self::apply_env_string("ORI_STORE_ENDPOINT", &mut self.store.endpoint);

        // HTTP
        Self::apply_env_parse("ORI_HTTP_TIMEOUT_SECS", &mut self.http.timeout_secs);

        // Logging
        Self::apply_env_parse("ORI_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("ORI_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("ORI_LOG_FILE", &mut self.logging.file);
        Self::apply_env_string("ORI_LOG_DIR", &mut self.logging.dir);

        // Session
        Self::apply_env_bool("ORI_SESSION_PERSIST", &mut self.session.persist);
        Self::apply_env_string("ORI_SESSION_FILE", &mut self.session.file);
    }

    /// Helper: Override a String when the variable is set
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Override a bool ("true"/"1"/"yes", any case, is true)
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = matches!(val.trim().to_lowercase().as_str(), "true" | "1" | "yes");
        }
    }

    /// Helper: Override a parseable value; unparseable values are ignored
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.trim().parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Override an optional String. An empty value clears it.
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val).filter(|v| !v.trim().is_empty());
        }
    }
}
