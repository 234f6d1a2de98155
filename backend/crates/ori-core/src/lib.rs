pub mod auth_error_kind;
pub mod error;
pub mod models;
pub mod validation;

pub use auth_error_kind::{AuthErrorKind, SUPPORT_CONTACT};
pub use error::{CoreError, Result};
pub use models::identity::{Identity, split_display_name};
pub use models::profile_fields::ProfileFields;
pub use models::session::Session;
pub use models::session_status::SessionStatus;
pub use models::user_profile::UserProfile;
pub use models::user_type::UserType;
pub use validation::field_errors::FieldErrors;
pub use validation::sign_in_form::SignInForm;
pub use validation::sign_up_form::SignUpForm;

#[cfg(test)]
mod tests;
