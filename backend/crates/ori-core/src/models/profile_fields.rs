use crate::UserType;

use serde::{Deserialize, Serialize};

/// Caller-supplied part of a profile, collected by the sign-up form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileFields {
    pub first_name: String,
    pub last_name: String,
    pub company: Option<String>,
    pub role: Option<String>,
    pub user_type: UserType,
}

impl ProfileFields {
    /// Display name pushed to the identity provider after sign-up
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
