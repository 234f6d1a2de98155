//! Form field contracts.
//!
//! Every check is pure and synchronous. A check returns the message to show for
//! its field, or `None` when the value is acceptable.

pub mod field_errors;
pub mod sign_in_form;
pub mod sign_up_form;

use std::sync::LazyLock;

use regex::Regex;

pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";
pub const CONFIRM_PASSWORD: &str = "confirmPassword";
pub const FIRST_NAME: &str = "firstName";
pub const LAST_NAME: &str = "lastName";
pub const COMPANY: &str = "company";
pub const ROLE: &str = "role";
pub const USER_TYPE: &str = "userType";

pub const MIN_PASSWORD_LENGTH: usize = 8;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

pub fn check_email(email: &str) -> Option<&'static str> {
    if email.trim().is_empty() {
        Some("Email is required")
    } else if !EMAIL_PATTERN.is_match(email) {
        Some("Please enter a valid email address")
    } else {
        None
    }
}

/// Sign-up rule: required and at least [`MIN_PASSWORD_LENGTH`] characters
pub fn check_new_password(password: &str) -> Option<&'static str> {
    if password.trim().is_empty() {
        Some("Password is required")
    } else if password.chars().count() < MIN_PASSWORD_LENGTH {
        Some("Password must be at least 8 characters long")
    } else {
        None
    }
}

/// Sign-in rule: required only
pub fn check_password_present(password: &str) -> Option<&'static str> {
    password
        .trim()
        .is_empty()
        .then_some("Password is required")
}

pub fn check_confirm_password(password: &str, confirm_password: &str) -> Option<&'static str> {
    if confirm_password.trim().is_empty() {
        Some("Please confirm your password")
    } else if password != confirm_password {
        Some("Passwords do not match")
    } else {
        None
    }
}

pub fn check_required(value: &str, message: &'static str) -> Option<&'static str> {
    value.trim().is_empty().then_some(message)
}
