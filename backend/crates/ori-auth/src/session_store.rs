//! Process-wide session state driven by ambient auth-state notifications.
//!
//! Every notification bumps a generation counter. A profile fetch started for
//! one notification only applies its result if no later notification arrived
//! in the meantime, so the last notification always wins no matter in which
//! order the fetches complete.

use crate::{AuthStateSubscription, IdentityProvider};

use ori_core::{Identity, Session, UserProfile};
use ori_db::{ProfileRepository, RepositoryError};

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, error, info};
use tokio::sync::watch;
use tokio::task::JoinHandle;

pub const PROFILE_LOAD_FAILED: &str = "Failed to load user profile";

/// Owner of the current [`Session`].
///
/// Construct once per process and share by reference. Readers take a snapshot
/// with [`SessionStore::current`] or follow changes through
/// [`SessionStore::subscribe`].
pub struct SessionStore {
    shared: Arc<Shared>,
    listener: Mutex<Option<JoinHandle<()>>>,
}

struct Shared {
    state: Mutex<StoreState>,
    sender: watch::Sender<Session>,
    /// Flips to `true` once on teardown so pending [`SessionStore::settled`] calls return
    teardown: watch::Sender<bool>,
    profiles: ProfileRepository,
}

#[derive(Default)]
struct StoreState {
    generation: u64,
    torn_down: bool,
}

impl SessionStore {
    /// Subscribe to `provider`'s auth state and start tracking the session.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(provider: &dyn IdentityProvider, profiles: ProfileRepository) -> Self {
        let (sender, _) = watch::channel(Session::authenticating());
        let shared = Arc::new(Shared {
            state: Mutex::new(StoreState::default()),
            sender,
            teardown: watch::Sender::new(false),
            profiles,
        });

        let subscription = provider.subscribe_to_auth_state();
        let listener = tokio::spawn(listen(Arc::clone(&shared), subscription));

        Self {
            shared,
            listener: Mutex::new(Some(listener)),
        }
    }

    /// Snapshot of the current session
    pub fn current(&self) -> Session {
        self.shared.sender.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.shared.sender.subscribe()
    }

    /// Wait until the session is no longer authenticating.
    ///
    /// Returns the frozen session right away once the store is torn down, even
    /// if that session is still authenticating.
    pub async fn settled(&self) -> Session {
        let mut sessions = self.subscribe();
        let mut teardown = self.shared.teardown.subscribe();

        tokio::select! {
            settled = sessions.wait_for(|session| !session.is_loading()) => {
                if let Ok(session) = settled {
                    return session.clone();
                }
            }
            _ = teardown.wait_for(|torn_down| *torn_down) => {
                debug!("Session store torn down before the session settled");
            }
        }
        self.current()
    }

    /// Number of notifications processed so far
    pub fn generation(&self) -> u64 {
        self.shared.lock().generation
    }

    /// Stop listening. The session is frozen from here on. Safe to call repeatedly.
    pub fn unsubscribe(&self) {
        let mut state = self.shared.lock();
        if state.torn_down {
            return;
        }
        state.torn_down = true;
        drop(state);
        self.shared.teardown.send_replace(true);

        let listener = self
            .listener
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(listener) = listener {
            listener.abort();
        }
        info!("Session store unsubscribed");
    }

    pub fn is_torn_down(&self) -> bool {
        self.shared.lock().torn_down
    }
}

impl Drop for SessionStore {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

async fn listen(shared: Arc<Shared>, mut subscription: AuthStateSubscription) {
    while let Some(identity) = subscription.next().await {
        if !shared.on_auth_state(identity) {
            break;
        }
    }
    subscription.unsubscribe();
    debug!("Auth state listener finished");
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply one notification. Returns `false` once the store is torn down.
    fn on_auth_state(self: &Arc<Self>, identity: Option<Identity>) -> bool {
        let mut state = self.lock();
        if state.torn_down {
            return false;
        }
        state.generation += 1;
        let generation = state.generation;

        let Some(identity) = identity else {
            debug!("Generation {generation}: signed out");
            self.sender.send_replace(Session::unauthenticated());
            return true;
        };

        debug!("Generation {generation}: loading profile for {}", identity.id);
        self.sender.send_replace(Session::authenticating());
        drop(state);

        let shared = Arc::clone(self);
        tokio::spawn(async move {
            let result = shared.profiles.get(&identity.id).await;
            shared.complete(generation, identity, result);
        });
        true
    }

    fn complete(
        &self,
        generation: u64,
        identity: Identity,
        result: Result<Option<UserProfile>, RepositoryError>,
    ) {
        let state = self.lock();
        if state.torn_down || state.generation != generation {
            debug!(
                "Discarding profile fetch for {} (generation {generation}, current {})",
                identity.id, state.generation
            );
            return;
        }

        let session = match result {
            Ok(Some(profile)) => Session::authenticated(identity, profile),
            Ok(None) => Session::authenticated_no_profile(identity),
            Err(e) => {
                error!("{PROFILE_LOAD_FAILED} for {}: {e}", identity.id);
                Session::error(Some(identity), PROFILE_LOAD_FAILED)
            }
        };
        self.sender.send_replace(session);
    }
}
