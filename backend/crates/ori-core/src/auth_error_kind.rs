//! Closed taxonomy of user-facing authentication failures.
//!
//! Provider error codes are mapped through [`CODE_TABLE`]; anything not listed
//! there is [`AuthErrorKind::Unknown`]. Every kind has one literal message that
//! is safe to show to the user as-is.

use serde::{Deserialize, Serialize};

/// Contact address appended to the generic failure message
pub const SUPPORT_CONTACT: &str = "info@ori.ventures";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthErrorKind {
    InvalidCredentials,
    AccountAlreadyExists,
    WeakPassword,
    InvalidEmailFormat,
    AccountDisabled,
    RateLimited,
    PopupCancelledByUser,
    PopupBlocked,
    ProviderAccountConflict,
    ConfigurationIncomplete,
    NetworkFailure,
    Unknown,
}

/// Provider code -> kind.
pub const CODE_TABLE: &[(&str, AuthErrorKind)] = &[
    ("auth/wrong-password", AuthErrorKind::InvalidCredentials),
    ("auth/user-not-found", AuthErrorKind::InvalidCredentials),
    ("auth/invalid-credential", AuthErrorKind::InvalidCredentials),
    ("auth/invalid-login-credentials", AuthErrorKind::InvalidCredentials),
    ("auth/email-already-in-use", AuthErrorKind::AccountAlreadyExists),
    ("auth/weak-password", AuthErrorKind::WeakPassword),
    ("auth/invalid-email", AuthErrorKind::InvalidEmailFormat),
    ("auth/user-disabled", AuthErrorKind::AccountDisabled),
    ("auth/too-many-requests", AuthErrorKind::RateLimited),
    ("auth/popup-closed-by-user", AuthErrorKind::PopupCancelledByUser),
    ("auth/cancelled-popup-request", AuthErrorKind::PopupCancelledByUser),
    ("auth/popup-blocked", AuthErrorKind::PopupBlocked),
    (
        "auth/account-exists-with-different-credential",
        AuthErrorKind::ProviderAccountConflict,
    ),
    ("auth/operation-not-allowed", AuthErrorKind::ConfigurationIncomplete),
    ("auth/configuration-not-found", AuthErrorKind::ConfigurationIncomplete),
    ("auth/invalid-api-key", AuthErrorKind::ConfigurationIncomplete),
    ("auth/network-request-failed", AuthErrorKind::NetworkFailure),
];

impl AuthErrorKind {
    pub const ALL: [AuthErrorKind; 12] = [
        Self::InvalidCredentials,
        Self::AccountAlreadyExists,
        Self::WeakPassword,
        Self::InvalidEmailFormat,
        Self::AccountDisabled,
        Self::RateLimited,
        Self::PopupCancelledByUser,
        Self::PopupBlocked,
        Self::ProviderAccountConflict,
        Self::ConfigurationIncomplete,
        Self::NetworkFailure,
        Self::Unknown,
    ];

    /// Classify a provider error code. Total: unmapped codes are `Unknown`.
    pub fn classify(code: &str) -> Self {
        let code = code.trim();
        CODE_TABLE
            .iter()
            .find(|(known, _)| *known == code)
            .map(|(_, kind)| *kind)
            .unwrap_or(Self::Unknown)
    }

    /// Literal message for direct display
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "Incorrect password. Please try again.",
            Self::AccountAlreadyExists => "An account with this email already exists.",
            Self::WeakPassword => "Password is too weak. Please choose a stronger password.",
            Self::InvalidEmailFormat => "Please enter a valid email address.",
            Self::AccountDisabled => "This account has been disabled. Please contact support.",
            Self::RateLimited => "Too many failed attempts. Please try again later.",
            Self::PopupCancelledByUser => "Sign in was cancelled.",
            Self::PopupBlocked => "Popup was blocked. Please allow popups and try again.",
            Self::ProviderAccountConflict => {
                "An account already exists with this email using a different sign-in method."
            }
            Self::ConfigurationIncomplete => {
                "Email/password accounts are not enabled. Please contact support."
            }
            Self::NetworkFailure => "Network error. Please check your connection and try again.",
            Self::Unknown => {
                "An error occurred. Please try again. If the problem persists, contact us directly at info@ori.ventures"
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "invalid_credentials",
            Self::AccountAlreadyExists => "account_already_exists",
            Self::WeakPassword => "weak_password",
            Self::InvalidEmailFormat => "invalid_email_format",
            Self::AccountDisabled => "account_disabled",
            Self::RateLimited => "rate_limited",
            Self::PopupCancelledByUser => "popup_cancelled_by_user",
            Self::PopupBlocked => "popup_blocked",
            Self::ProviderAccountConflict => "provider_account_conflict",
            Self::ConfigurationIncomplete => "configuration_incomplete",
            Self::NetworkFailure => "network_failure",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for AuthErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
