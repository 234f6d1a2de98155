pub mod auth_gateway;
pub mod error;
pub mod provider;
pub mod session_store;

pub use auth_gateway::{AuthGateway, FederatedSignIn, PASSWORD_RESET_PLACEHOLDER};
pub use error::{AuthFailure, ProviderError, ProviderResult, Result};
pub use provider::auth_state::{AuthStateNotifier, AuthStateSubscription};
pub use provider::codes;
pub use provider::federated_flow::{FederatedFlow, IdpCredential, StaticIdpFlow};
pub use provider::identity_provider::IdentityProvider;
pub use provider::identity_toolkit::{IdentityToolkitProvider, PersistedCredential};
pub use provider::in_memory::{InMemoryIdentityProvider, ProviderOperation};
pub use provider::rest_error::code_for_rest_message;
pub use session_store::{PROFILE_LOAD_FAILED, SessionStore};
