//! Session - the process-local "current user + profile" view.
//!
//! Values are built only through the constructors below so the field
//! invariants hold:
//! - `identity` is present for the authenticated variants and for `Error`
//!   (a failed profile load keeps the user signed in)
//! - `profile` is present iff `Authenticated`
//! - `error_message` is present iff `Error`

use crate::{Identity, SessionStatus, UserProfile};

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    status: SessionStatus,
    identity: Option<Identity>,
    profile: Option<UserProfile>,
    error_message: Option<String>,
}

impl Session {
    pub fn authenticating() -> Self {
        Self::default()
    }

    pub fn unauthenticated() -> Self {
        Self {
            status: SessionStatus::Unauthenticated,
            ..Self::default()
        }
    }

    pub fn authenticated(identity: Identity, profile: UserProfile) -> Self {
        Self {
            status: SessionStatus::Authenticated,
            identity: Some(identity),
            profile: Some(profile),
            error_message: None,
        }
    }

    pub fn authenticated_no_profile(identity: Identity) -> Self {
        Self {
            status: SessionStatus::AuthenticatedNoProfile,
            identity: Some(identity),
            profile: None,
            error_message: None,
        }
    }

    pub fn error(identity: Option<Identity>, message: impl Into<String>) -> Self {
        Self {
            status: SessionStatus::Error,
            identity,
            profile: None,
            error_message: Some(message.into()),
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Still waiting on the provider or on a profile fetch
    pub fn is_loading(&self) -> bool {
        self.status == SessionStatus::Authenticating
    }
}
