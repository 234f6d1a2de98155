#![allow(dead_code)]

use ori_auth::{AuthGateway, InMemoryIdentityProvider, SessionStore};
use ori_core::{ProfileFields, Session, SessionStatus, UserProfile, UserType};
use ori_db::{InMemoryDocumentStore, ProfileRepository};

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::time::timeout;

/// Everything needed to drive the auth flows against in-memory backends
pub struct TestHarness {
    pub provider: InMemoryIdentityProvider,
    pub store: InMemoryDocumentStore,
    pub profiles: ProfileRepository,
    pub gateway: AuthGateway,
}

pub fn create_test_harness() -> TestHarness {
    let provider = InMemoryIdentityProvider::new();
    let store = InMemoryDocumentStore::new();
    let profiles = ProfileRepository::new(Arc::new(store.clone()));
    let gateway = AuthGateway::new(Arc::new(provider.clone()), profiles.clone());

    TestHarness {
        provider,
        store,
        profiles,
        gateway,
    }
}

impl TestHarness {
    pub fn start_session_store(&self) -> SessionStore {
        SessionStore::start(&self.provider, self.profiles.clone())
    }
}

/// Creates ProfileFields with sensible defaults
pub fn create_test_fields() -> ProfileFields {
    ProfileFields {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        company: Some("Analytical Engines".to_string()),
        role: Some("Founder".to_string()),
        user_type: UserType::Advisor,
    }
}

/// Generous upper bound for the session to react to a notification
pub const SETTLE_TIMEOUT: Duration = Duration::from_secs(5);

/// Creates a stored-shape profile for `id`
pub fn create_test_profile(id: &str) -> UserProfile {
    UserProfile::new(id, &format!("{id}@example.com"), create_test_fields(), Utc::now())
}

/// Wait until the session reaches `status`, panicking after [`SETTLE_TIMEOUT`]
pub async fn wait_for_status(store: &SessionStore, status: SessionStatus) -> Session {
    let mut receiver = store.subscribe();
    let session = timeout(
        SETTLE_TIMEOUT,
        receiver.wait_for(|session| session.status() == status),
    )
    .await
    .expect("timed out waiting for session status")
    .expect("session channel closed")
    .clone();
    session
}
