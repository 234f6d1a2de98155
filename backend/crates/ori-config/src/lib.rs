mod config;
mod error;
mod http_config;
mod identity_config;
mod log_level;
mod logging_config;
mod session_config;
mod store_config;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use http_config::HttpConfig;
pub use identity_config::IdentityConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;
pub use store_config::StoreConfig;

const CONFIG_DIR_ENV: &str = "ORI_CONFIG_DIR";
const DEFAULT_CONFIG_DIRECTORY: &str = ".ori";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_IDENTITY_ENDPOINT: &str = "https://identitytoolkit.googleapis.com";
const DEFAULT_FEDERATED_REQUEST_URI: &str = "http://localhost";
const DEFAULT_FEDERATED_PROVIDER_ID: &str = "google.com";

const DEFAULT_STORE_ENDPOINT: &str = "https://firestore.googleapis.com";
const DEFAULT_STORE_DATABASE: &str = "(default)";

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
const MIN_HTTP_TIMEOUT_SECS: u64 = 1;
const MAX_HTTP_TIMEOUT_SECS: u64 = 300;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_SESSION_PERSIST: bool = true;
const DEFAULT_SESSION_FILENAME: &str = "session.json";

#[cfg(test)]
mod tests;
