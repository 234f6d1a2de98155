use crate::{AuthStateSubscription, ProviderResult};

use ori_core::Identity;

use async_trait::async_trait;

/// Identity provider boundary.
///
/// Every successful sign-in, sign-up, or sign-out is also published to the
/// provider's auth-state subscribers.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Register a new email/password credential and sign it in.
    async fn create_credential(&self, email: &str, password: &str) -> ProviderResult<Identity>;

    async fn authenticate_credential(&self, email: &str, password: &str)
    -> ProviderResult<Identity>;

    /// Run the third-party sign-in flow and sign the resulting identity in.
    async fn authenticate_federated(&self) -> ProviderResult<Identity>;

    async fn update_display_name(&self, identity: &Identity, display_name: &str)
    -> ProviderResult<()>;

    async fn sign_out(&self) -> ProviderResult<()>;

    fn subscribe_to_auth_state(&self) -> AuthStateSubscription;
}
