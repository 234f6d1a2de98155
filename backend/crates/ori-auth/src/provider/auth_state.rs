//! Ambient authentication-state notifications.
//!
//! A provider owns one [`AuthStateNotifier`] and publishes the signed-in
//! identity (or `None`) every time it changes. Each subscriber gets its own
//! channel; a new subscriber first receives the latest published state, so a
//! late subscriber still sees the initial notification.

use ori_core::Identity;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::debug;
use tokio::sync::mpsc;

#[derive(Clone, Default)]
pub struct AuthStateNotifier {
    inner: Arc<Mutex<NotifierInner>>,
}

#[derive(Default)]
struct NotifierInner {
    /// `None` until the provider has determined its initial state
    latest: Option<Option<Identity>>,
    subscribers: Vec<mpsc::UnboundedSender<Option<Identity>>>,
}

impl AuthStateNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `identity` to every live subscriber. Closed subscriptions are pruned.
    pub fn publish(&self, identity: Option<Identity>) {
        let mut inner = self.lock();

        inner
            .subscribers
            .retain(|subscriber| subscriber.send(identity.clone()).is_ok());

        debug!(
            "Auth state changed to {} ({} subscriber(s))",
            identity.as_ref().map_or("<signed out>", |i| i.id.as_str()),
            inner.subscribers.len()
        );
        inner.latest = Some(identity);
    }

    pub fn subscribe(&self) -> AuthStateSubscription {
        let (sender, receiver) = mpsc::unbounded_channel();
        let mut inner = self.lock();

        if let Some(latest) = &inner.latest {
            // Receiver is alive in this scope
            let _ = sender.send(latest.clone());
        }
        inner.subscribers.push(sender);

        AuthStateSubscription { receiver }
    }

    /// Most recently published state, `None` before the first publish
    pub fn latest(&self) -> Option<Option<Identity>> {
        self.lock().latest.clone()
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock()
            .subscribers
            .iter()
            .filter(|subscriber| !subscriber.is_closed())
            .count()
    }

    fn lock(&self) -> MutexGuard<'_, NotifierInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Stream of auth-state notifications. Dropping it ends delivery.
pub struct AuthStateSubscription {
    receiver: mpsc::UnboundedReceiver<Option<Identity>>,
}

impl AuthStateSubscription {
    /// Next notification; `None` once the provider is gone or the
    /// subscription was closed.
    pub async fn next(&mut self) -> Option<Option<Identity>> {
        self.receiver.recv().await
    }

    /// Stop delivery. Notifications already queued can still be drained.
    pub fn unsubscribe(&mut self) {
        self.receiver.close();
    }
}
