use ori_auth::{AuthFailure, ProviderError};
use ori_config::ConfigError;
use ori_core::{AuthErrorKind, CoreError, FieldErrors};
use ori_db::StoreError;

use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use serde_json::{Value, json};
use thiserror::Error;

/// Exit status for input rejected by local validation
const INVALID_INPUT_EXIT: u8 = 2;
const FAILURE_EXIT: u8 = 1;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {source} {location}")]
    Config {
        #[source]
        source: ConfigError,
        location: ErrorLocation,
    },

    #[error("Invalid input: {errors} {location}")]
    InvalidForm {
        errors: FieldErrors,
        location: ErrorLocation,
    },

    #[error("{source} {location}")]
    Core {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("{source} {location}")]
    Auth {
        #[source]
        source: AuthFailure,
        location: ErrorLocation,
    },

    #[error("{source} {location}")]
    Provider {
        #[source]
        source: ProviderError,
        location: ErrorLocation,
    },

    #[error("{source} {location}")]
    Store {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },

    #[error("Session file {path}: {source}")]
    SessionIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Session file {path} is not valid JSON: {source}")]
    SessionJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON output error: {source} {location}")]
    Output {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn invalid_form(errors: FieldErrors) -> Self {
        CliError::InvalidForm {
            errors,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        CliError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Category shown to the user, `None` for failures outside the auth flow
    pub fn kind(&self) -> Option<AuthErrorKind> {
        match self {
            CliError::Config { .. } => Some(AuthErrorKind::ConfigurationIncomplete),
            CliError::Auth { source, .. } => Some(source.kind()),
            CliError::Provider { source, .. } => Some(source.kind()),
            CliError::Store {
                source: StoreError::Unavailable { .. },
                ..
            } => Some(AuthErrorKind::NetworkFailure),
            CliError::Store { .. } => Some(AuthErrorKind::Unknown),
            _ => None,
        }
    }

    /// JSON written to stderr when a command fails
    pub fn report(&self) -> Value {
        if let CliError::InvalidForm { errors, .. } = self {
            return json!({ "errors": errors });
        }

        let message = match self {
            CliError::Config { source, .. } if source.is_missing() => {
                AuthErrorKind::ConfigurationIncomplete.message().to_string()
            }
            CliError::Config { .. } => self.to_string(),
            CliError::Auth { source, .. } => source.message().to_string(),
            _ => match self.kind() {
                Some(AuthErrorKind::Unknown) | None => self.to_string(),
                Some(kind) => kind.message().to_string(),
            },
        };

        let mut error = json!({
            "kind": self.kind().map(|kind| kind.as_str()).unwrap_or("internal"),
            "message": message,
        });
        if let CliError::Auth { source, .. } = self
            && let Some(identity) = source.identity()
        {
            error["identity"] = json!(identity);
        }

        json!({ "error": error })
    }

    /// Process exit status: 2 for rejected input, 1 for everything else
    pub fn exit_status(&self) -> u8 {
        match self {
            CliError::InvalidForm { .. } => INVALID_INPUT_EXIT,
            _ => FAILURE_EXIT,
        }
    }
}

impl From<ConfigError> for CliError {
    #[track_caller]
    fn from(source: ConfigError) -> Self {
        CliError::Config {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for CliError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        match source {
            CoreError::InvalidForm { errors, .. } => CliError::invalid_form(errors),
            source => CliError::Core {
                source,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<AuthFailure> for CliError {
    #[track_caller]
    fn from(source: AuthFailure) -> Self {
        CliError::Auth {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ProviderError> for CliError {
    #[track_caller]
    fn from(source: ProviderError) -> Self {
        CliError::Provider {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StoreError> for CliError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        CliError::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        CliError::Output {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
