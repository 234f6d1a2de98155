use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures reported by a [`crate::DocumentStore`] implementation.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Document store unreachable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },

    #[error("Document store rejected request ({status}): {message} {location}")]
    Rejected {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Document encoding error: {message} {location}")]
    Encoding {
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn unavailable<S: Into<String>>(message: S) -> Self {
        Self::Unavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn rejected<S: Into<String>>(status: u16, message: S) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn encoding<S: Into<String>>(message: S) -> Self {
        Self::Encoding {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for StoreError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        let message = source.to_string();
        let location = ErrorLocation::from(Location::caller());
        if source.is_decode() {
            Self::Encoding { message, location }
        } else {
            Self::Unavailable { message, location }
        }
    }
}

/// Failures of [`crate::ProfileRepository`] operations.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Profile store unavailable: {message} {location}")]
    StoreUnavailable {
        message: String,
        location: ErrorLocation,
    },

    /// The store answered but refused the request or returned an unreadable body
    #[error("Profile store request failed: {message} {location}")]
    StoreRejected {
        message: String,
        location: ErrorLocation,
    },

    #[error("Profile not found: {id} {location}")]
    NotFound { id: String, location: ErrorLocation },

    #[error("Malformed profile document {id}: field '{field}' {message} {location}")]
    MalformedDocument {
        id: String,
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl RepositoryError {
    #[track_caller]
    pub fn not_found<S: Into<String>>(id: S) -> Self {
        Self::NotFound {
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn malformed<S: Into<String>>(id: &str, field: &'static str, message: S) -> Self {
        Self::MalformedDocument {
            id: id.to_string(),
            field,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, Self::StoreUnavailable { .. })
    }
}

impl From<StoreError> for RepositoryError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        let message = source.to_string();
        let location = ErrorLocation::from(Location::caller());
        match source {
            StoreError::Unavailable { .. } => Self::StoreUnavailable { message, location },
            StoreError::Rejected { .. } | StoreError::Encoding { .. } => {
                Self::StoreRejected { message, location }
            }
        }
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
pub type Result<T> = std::result::Result<T, RepositoryError>;
