mod identity;
mod session;
mod user_profile;
mod user_type;
