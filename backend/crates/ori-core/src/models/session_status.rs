use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Lifecycle status of the process-local session view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Unauthenticated,
    /// Waiting for the provider's first notification, or for a profile fetch.
    #[default]
    Authenticating,
    Authenticated,
    /// Signed in, but no profile document exists for the identity.
    AuthenticatedNoProfile,
    Error,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "unauthenticated",
            Self::Authenticating => "authenticating",
            Self::Authenticated => "authenticated",
            Self::AuthenticatedNoProfile => "authenticated_no_profile",
            Self::Error => "error",
        }
    }

    /// True for both authenticated variants
    pub fn is_signed_in(&self) -> bool {
        matches!(self, Self::Authenticated | Self::AuthenticatedNoProfile)
    }
}

impl FromStr for SessionStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "unauthenticated" => Ok(Self::Unauthenticated),
            "authenticating" => Ok(Self::Authenticating),
            "authenticated" => Ok(Self::Authenticated),
            "authenticated_no_profile" => Ok(Self::AuthenticatedNoProfile),
            "error" => Ok(Self::Error),
            _ => Err(CoreError::InvalidSessionStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
