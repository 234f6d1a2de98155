use crate::validation::{
    COMPANY, CONFIRM_PASSWORD, EMAIL, FIRST_NAME, LAST_NAME, PASSWORD, ROLE, USER_TYPE,
    check_confirm_password, check_email, check_new_password, check_required,
};
use crate::{CoreError, FieldErrors, ProfileFields, Result as CoreErrorResult, UserType};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::Deserialize;

/// Raw registration form input, exactly as typed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignUpForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub role: String,
    /// `None` until the user picks one of the three types
    pub user_type: Option<UserType>,
}

impl SignUpForm {
    /// Set the user type from its string form. Unrecognized input leaves the
    /// type unselected, which validation then reports.
    pub fn select_user_type(&mut self, value: &str) {
        self.user_type = UserType::from_str(value.trim()).ok();
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check(
            FIRST_NAME,
            check_required(&self.first_name, "First name is required"),
        );
        errors.check(
            LAST_NAME,
            check_required(&self.last_name, "Last name is required"),
        );
        errors.check(EMAIL, check_email(&self.email));
        errors.check(PASSWORD, check_new_password(&self.password));
        errors.check(
            CONFIRM_PASSWORD,
            check_confirm_password(&self.password, &self.confirm_password),
        );
        errors.check(
            COMPANY,
            check_required(&self.company, "Company name is required"),
        );
        errors.check(ROLE, check_required(&self.role, "Role is required"));
        if self.user_type.is_none() {
            errors.check(USER_TYPE, Some("Please select one user type"));
        }
        errors
    }

    /// Validate and convert into the profile part of a sign-up request.
    #[track_caller]
    pub fn to_profile_fields(&self) -> CoreErrorResult<ProfileFields> {
        let errors = self.validate();
        let user_type = match self.user_type {
            Some(user_type) if errors.is_empty() => user_type,
            _ => {
                return Err(CoreError::InvalidForm {
                    errors,
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        Ok(ProfileFields {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            company: Some(self.company.trim().to_string()),
            role: Some(self.role.trim().to_string()),
            user_type,
        })
    }
}
