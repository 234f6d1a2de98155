//! UserProfile entity - the application-owned record for an identity.

use crate::{Identity, ProfileFields, UserType};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Profile document keyed by the identity id.
///
/// `user_type` and `created_at` are fixed at creation. Only `last_login_at`
/// changes afterwards, through a merge-only write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub company: Option<String>,
    pub role: Option<String>,
    pub user_type: UserType,
    pub created_at: DateTime<Utc>,
    pub last_login_at: DateTime<Utc>,
}

impl UserProfile {
    /// Profile for a password sign-up. Both timestamps are `now`.
    pub fn new(identity_id: &str, email: &str, fields: ProfileFields, now: DateTime<Utc>) -> Self {
        Self {
            id: identity_id.to_string(),
            email: email.to_string(),
            first_name: fields.first_name,
            last_name: fields.last_name,
            company: fields.company,
            role: fields.role,
            user_type: fields.user_type,
            created_at: now,
            last_login_at: now,
        }
    }

    /// Profile for a first-time federated sign-in.
    ///
    /// Names come from the provider's display name and the user type defaults
    /// to [`UserType::Startup`].
    pub fn from_federated(identity: &Identity, now: DateTime<Utc>) -> Self {
        let (first_name, last_name) = identity.split_name();
        Self {
            id: identity.id.clone(),
            email: identity.email.clone().unwrap_or_default(),
            first_name,
            last_name,
            company: None,
            role: None,
            user_type: UserType::default(),
            created_at: now,
            last_login_at: now,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}
