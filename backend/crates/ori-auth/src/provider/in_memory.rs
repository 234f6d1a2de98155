use crate::{
    AuthStateNotifier, AuthStateSubscription, IdentityProvider, ProviderError, ProviderResult,
    codes,
};

use ori_core::Identity;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use log::debug;
use uuid::Uuid;

/// Provider-side minimum, independent of the sign-up form's own rule.
const MIN_PROVIDER_PASSWORD_LENGTH: usize = 6;

/// Operations that can be scripted to fail with [`InMemoryIdentityProvider::fail_next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderOperation {
    CreateCredential,
    AuthenticateCredential,
    AuthenticateFederated,
    UpdateDisplayName,
    SignOut,
}

/// Process-local identity provider for development and tests.
///
/// Accounts are keyed by lower-cased email. Federated sign-in returns the
/// scripted identity. Auth-state notifications are published synchronously,
/// and the initial state (signed out) is known from construction.
#[derive(Clone)]
pub struct InMemoryIdentityProvider {
    inner: Arc<Mutex<ProviderInner>>,
    notifier: AuthStateNotifier,
}

#[derive(Default)]
struct ProviderInner {
    accounts: HashMap<String, Account>,
    federated: Option<Identity>,
    failures: HashMap<ProviderOperation, String>,
    current: Option<Identity>,
}

struct Account {
    identity: Identity,
    password: String,
}

impl Default for InMemoryIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryIdentityProvider {
    pub fn new() -> Self {
        let notifier = AuthStateNotifier::new();
        notifier.publish(None);
        Self {
            inner: Arc::new(Mutex::new(ProviderInner::default())),
            notifier,
        }
    }

    /// Identity returned by the next federated sign-ins
    pub fn script_federated(&self, identity: Identity) {
        self.lock().federated = Some(identity);
    }

    /// Make the next call of `operation` fail with `code`.
    pub fn fail_next(&self, operation: ProviderOperation, code: &str) {
        self.lock().failures.insert(operation, code.to_string());
    }

    /// Force an auth-state change as if the provider observed one.
    pub fn set_current_user(&self, identity: Option<Identity>) {
        self.lock().current = identity.clone();
        self.notifier.publish(identity);
    }

    pub fn current_user(&self) -> Option<Identity> {
        self.lock().current.clone()
    }

    pub fn account_count(&self) -> usize {
        self.lock().accounts.len()
    }

    pub fn notifier(&self) -> &AuthStateNotifier {
        &self.notifier
    }

    fn lock(&self) -> MutexGuard<'_, ProviderInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[track_caller]
    fn take_failure(&self, operation: ProviderOperation) -> ProviderResult<()> {
        match self.lock().failures.remove(&operation) {
            Some(code) => Err(ProviderError::new(
                code,
                format!("scripted failure for {operation:?}"),
            )),
            None => Ok(()),
        }
    }

    fn sign_in(&self, identity: Identity) -> Identity {
        self.lock().current = Some(identity.clone());
        self.notifier.publish(Some(identity.clone()));
        identity
    }
}

#[async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn create_credential(&self, email: &str, password: &str) -> ProviderResult<Identity> {
        self.take_failure(ProviderOperation::CreateCredential)?;

        let email = email.trim();
        if !email.contains('@') {
            return Err(ProviderError::new(codes::INVALID_EMAIL, "malformed email"));
        }
        if password.chars().count() < MIN_PROVIDER_PASSWORD_LENGTH {
            return Err(ProviderError::new(
                codes::WEAK_PASSWORD,
                format!("password shorter than {MIN_PROVIDER_PASSWORD_LENGTH} characters"),
            ));
        }

        let identity = {
            let mut inner = self.lock();
            let key = email.to_lowercase();
            if inner.accounts.contains_key(&key) {
                return Err(ProviderError::new(
                    codes::EMAIL_ALREADY_IN_USE,
                    "email already registered",
                ));
            }

            let identity = Identity::new(Uuid::new_v4().simple().to_string()).with_email(email);
            inner.accounts.insert(
                key,
                Account {
                    identity: identity.clone(),
                    password: password.to_string(),
                },
            );
            identity
        };

        debug!("Created in-memory credential {}", identity.id);
        Ok(self.sign_in(identity))
    }

    async fn authenticate_credential(
        &self,
        email: &str,
        password: &str,
    ) -> ProviderResult<Identity> {
        self.take_failure(ProviderOperation::AuthenticateCredential)?;

        let identity = {
            let inner = self.lock();
            let Some(account) = inner.accounts.get(&email.trim().to_lowercase()) else {
                return Err(ProviderError::new(codes::USER_NOT_FOUND, "no such account"));
            };
            if account.password != password {
                return Err(ProviderError::new(codes::WRONG_PASSWORD, "password mismatch"));
            }
            account.identity.clone()
        };

        Ok(self.sign_in(identity))
    }

    async fn authenticate_federated(&self) -> ProviderResult<Identity> {
        self.take_failure(ProviderOperation::AuthenticateFederated)?;

        let Some(identity) = self.lock().federated.clone() else {
            return Err(ProviderError::new(
                codes::POPUP_CLOSED_BY_USER,
                "no federated identity scripted",
            ));
        };

        Ok(self.sign_in(identity))
    }

    async fn update_display_name(
        &self,
        identity: &Identity,
        display_name: &str,
    ) -> ProviderResult<()> {
        self.take_failure(ProviderOperation::UpdateDisplayName)?;

        let mut inner = self.lock();
        let Some(account) = inner
            .accounts
            .values_mut()
            .find(|account| account.identity.id == identity.id)
        else {
            return Err(ProviderError::new(codes::USER_NOT_FOUND, "no such account"));
        };
        account.identity.display_name = Some(display_name.to_string());

        if let Some(current) = inner.current.as_mut()
            && current.id == identity.id
        {
            current.display_name = Some(display_name.to_string());
        }

        Ok(())
    }

    async fn sign_out(&self) -> ProviderResult<()> {
        self.take_failure(ProviderOperation::SignOut)?;

        self.set_current_user(None);
        Ok(())
    }

    fn subscribe_to_auth_state(&self) -> AuthStateSubscription {
        self.notifier.subscribe()
    }
}
