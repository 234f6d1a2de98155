use crate::codes;

use ori_core::{AuthErrorKind, Identity};
use ori_db::RepositoryError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failure reported by an [`crate::IdentityProvider`], carrying its error code.
#[derive(Error, Debug)]
#[error("Identity provider error {code}: {message} {location}")]
pub struct ProviderError {
    pub code: String,
    pub message: String,
    pub location: ErrorLocation,
}

impl ProviderError {
    #[track_caller]
    pub fn new<C: Into<String>, M: Into<String>>(code: C, message: M) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Request could not reach the provider
    #[track_caller]
    pub fn network<M: Into<String>>(message: M) -> Self {
        Self::new(codes::NETWORK_REQUEST_FAILED, message)
    }

    #[track_caller]
    pub fn from_reqwest(source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::new(codes::TIMEOUT, source.to_string())
        } else if source.is_decode() {
            // The service answered; its body just did not match the expected shape
            Self::new(codes::INTERNAL_ERROR, source.to_string())
        } else {
            Self::network(source.to_string())
        }
    }

    pub fn kind(&self) -> AuthErrorKind {
        AuthErrorKind::classify(&self.code)
    }
}

/// Failure of an [`crate::AuthGateway`] operation.
///
/// Every variant resolves to one [`AuthErrorKind`], and [`AuthFailure::message`]
/// is always that kind's literal message, so callers can show it directly.
#[derive(Error, Debug)]
pub enum AuthFailure {
    #[error("Authentication failed ({kind}): {code} {location}")]
    Provider {
        kind: AuthErrorKind,
        code: String,
        location: ErrorLocation,
    },

    #[error("Profile store failure: {source} {location}")]
    Store {
        #[source]
        source: RepositoryError,
        location: ErrorLocation,
    },

    /// The credential exists but its profile document could not be written.
    #[error("Signed in as {} but profile was not created: {source} {location}", .identity.id)]
    ProfileNotCreated {
        identity: Identity,
        #[source]
        source: RepositoryError,
        location: ErrorLocation,
    },
}

impl AuthFailure {
    #[track_caller]
    pub fn profile_not_created(identity: Identity, source: RepositoryError) -> Self {
        Self::ProfileNotCreated {
            identity,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn kind(&self) -> AuthErrorKind {
        match self {
            Self::Provider { kind, .. } => *kind,
            Self::Store { source, .. } | Self::ProfileNotCreated { source, .. } => {
                if source.is_store_unavailable() {
                    AuthErrorKind::NetworkFailure
                } else {
                    AuthErrorKind::Unknown
                }
            }
        }
    }

    /// User-facing message for this failure
    pub fn message(&self) -> &'static str {
        self.kind().message()
    }

    /// Identity that is signed in despite the failure, if any
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::ProfileNotCreated { identity, .. } => Some(identity),
            _ => None,
        }
    }
}

impl From<ProviderError> for AuthFailure {
    #[track_caller]
    fn from(err: ProviderError) -> Self {
        Self::Provider {
            kind: err.kind(),
            code: err.code,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<RepositoryError> for AuthFailure {
    #[track_caller]
    fn from(source: RepositoryError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ProviderResult<T> = std::result::Result<T, ProviderError>;
pub type Result<T> = std::result::Result<T, AuthFailure>;
