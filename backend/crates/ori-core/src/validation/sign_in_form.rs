use crate::FieldErrors;
use crate::validation::{EMAIL, PASSWORD, check_email, check_password_present};

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl SignInForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check(EMAIL, check_email(&self.email));
        errors.check(PASSWORD, check_password_present(&self.password));
        errors
    }
}
