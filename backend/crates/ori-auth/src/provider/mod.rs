pub mod auth_state;
pub mod codes;
pub mod federated_flow;
pub mod identity_provider;
pub mod identity_toolkit;
pub mod in_memory;
pub mod rest_error;
