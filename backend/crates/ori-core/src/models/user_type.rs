use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Kind of account holder. Set once when the profile is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    Advisor,
    Investor,
    /// Assigned to first-time federated users, who never pick a type.
    #[default]
    Startup,
}

impl UserType {
    pub const ALL: [UserType; 3] = [Self::Advisor, Self::Investor, Self::Startup];

    /// Convert to the stored string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Advisor => "advisor",
            Self::Investor => "investor",
            Self::Startup => "startup",
        }
    }
}

impl FromStr for UserType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "advisor" => Ok(Self::Advisor),
            "investor" => Ok(Self::Investor),
            "startup" => Ok(Self::Startup),
            _ => Err(CoreError::InvalidUserType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
