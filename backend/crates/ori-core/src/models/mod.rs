pub mod identity;
pub mod profile_fields;
pub mod session;
pub mod session_status;
pub mod user_profile;
pub mod user_type;
