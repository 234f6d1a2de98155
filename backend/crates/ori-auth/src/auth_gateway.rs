//! Sign-up, sign-in, and sign-out orchestration.
//!
//! Each operation is a single attempt: the provider call, then the profile
//! write it implies. Nothing is retried and no credential is ever deleted to
//! compensate for a failed profile write.

use crate::{AuthFailure, IdentityProvider, Result as AuthResult};

use ori_core::{Identity, ProfileFields, SUPPORT_CONTACT, UserProfile};
use ori_db::ProfileRepository;

use std::sync::Arc;

use chrono::Utc;
use log::{info, warn};
use serde::Serialize;

pub const PASSWORD_RESET_PLACEHOLDER: &str = "Forgot password functionality will be implemented soon. Please contact info@ori.ventures for assistance.";

/// Result of a federated sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FederatedSignIn {
    pub identity: Identity,
    pub profile: UserProfile,
    /// `true` when this sign-in created the profile
    pub is_new_user: bool,
}

#[derive(Clone)]
pub struct AuthGateway {
    provider: Arc<dyn IdentityProvider>,
    profiles: ProfileRepository,
}

impl AuthGateway {
    pub fn new(provider: Arc<dyn IdentityProvider>, profiles: ProfileRepository) -> Self {
        Self { provider, profiles }
    }

    /// Create the credential, name it, and write the profile document.
    ///
    /// A failed display-name update is only logged. A failed profile write
    /// returns [`AuthFailure::ProfileNotCreated`] with the new identity, which
    /// stays signed in.
    pub async fn sign_up_with_email(
        &self,
        email: &str,
        password: &str,
        fields: ProfileFields,
    ) -> AuthResult<(Identity, UserProfile)> {
        let mut identity = self.provider.create_credential(email, password).await?;
        info!("Created credential {}", identity.id);

        let display_name = fields.display_name();
        match self
            .provider
            .update_display_name(&identity, &display_name)
            .await
        {
            Ok(()) => identity.display_name = Some(display_name),
            Err(e) => warn!("Failed to set display name for {}: {e}", identity.id),
        }

        let email = identity.email.clone().unwrap_or_else(|| email.to_string());
        let profile = UserProfile::new(&identity.id, &email, fields, Utc::now());

        if let Err(source) = self.profiles.create(&profile).await {
            return Err(AuthFailure::profile_not_created(identity, source));
        }

        info!("Created profile for {} as {}", profile.id, profile.user_type);
        Ok((identity, profile))
    }

    /// Authenticate and record the login time.
    ///
    /// An identity without a profile document is still signed in; the
    /// session reports it as having no profile.
    pub async fn sign_in_with_email(&self, email: &str, password: &str) -> AuthResult<Identity> {
        let identity = self
            .provider
            .authenticate_credential(email, password)
            .await?;

        match self.profiles.touch_login(&identity.id, Utc::now()).await {
            Ok(()) => {}
            Err(e) if e.is_not_found() => {
                warn!("Signed in {} without a profile document", identity.id);
            }
            Err(e) => return Err(AuthFailure::from(e)),
        }

        info!("Signed in {}", identity.id);
        Ok(identity)
    }

    /// Federated sign-in. The first sign-in of an identity creates its
    /// profile; later ones only record the login time.
    pub async fn sign_in_with_federated(&self) -> AuthResult<FederatedSignIn> {
        let identity = self.provider.authenticate_federated().await?;
        let now = Utc::now();

        if let Some(mut profile) = self.profiles.get(&identity.id).await? {
            self.profiles.touch_login(&identity.id, now).await?;
            profile.last_login_at = now;

            info!("Federated sign-in of existing user {}", identity.id);
            return Ok(FederatedSignIn {
                identity,
                profile,
                is_new_user: false,
            });
        }

        let profile = UserProfile::from_federated(&identity, now);
        if let Err(source) = self.profiles.create(&profile).await {
            return Err(AuthFailure::profile_not_created(identity, source));
        }

        info!("Federated sign-in created profile for {}", identity.id);
        Ok(FederatedSignIn {
            identity,
            profile,
            is_new_user: true,
        })
    }

    pub async fn sign_out(&self) -> AuthResult<()> {
        self.provider.sign_out().await?;
        info!("Signed out");
        Ok(())
    }

    /// Password reset is not offered yet; the message points users at support.
    /// The address is never logged.
    pub fn request_password_reset(&self, _email: &str) -> &'static str {
        info!("Password reset requested; directing to {SUPPORT_CONTACT}");
        PASSWORD_RESET_PLACEHOLDER
    }
}
