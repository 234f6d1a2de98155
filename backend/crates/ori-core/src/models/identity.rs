//! Identity - the credential holder record issued by the identity provider.

use serde::{Deserialize, Serialize};

/// Opaque record owned by the identity provider. The application only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Stable, provider-assigned id. Also the key of the user's profile document.
    pub id: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
}

impl Identity {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: None,
            display_name: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// First and last name derived from the display name.
    pub fn split_name(&self) -> (String, String) {
        split_display_name(self.display_name.as_deref())
    }
}

/// Split a display name into `(first, last)`.
///
/// The first whitespace-delimited token is the first name; the remaining tokens
/// joined by a single space are the last name. Missing parts are empty strings.
pub fn split_display_name(display_name: Option<&str>) -> (String, String) {
    let mut tokens = display_name.unwrap_or_default().split_whitespace();
    let first = tokens.next().unwrap_or_default().to_string();
    let last = tokens.collect::<Vec<_>>().join(" ");
    (first, last)
}
