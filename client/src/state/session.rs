//! Session gate and the session-change event hub.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity client publishes sign-in, sign-out, recovery and refresh
//! notifications through `SessionEvents`. The app root subscribes once and
//! holds the returned `Subscription` for its lifetime; dropping it on
//! teardown detaches the listener.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, Weak};

use serde::{Deserialize, Serialize};

/// An authenticated identity-provider session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub access_token: String,
    pub refresh_token: Option<String>,
    /// Unix seconds at which `access_token` expires.
    pub expires_at: Option<i64>,
}

impl Session {
    /// Name used in greetings: profile name, then email local part, then "there".
    #[must_use]
    pub fn display_name(&self) -> String {
        if let Some(name) = self.display_name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
            return name.to_owned();
        }
        self.email
            .as_deref()
            .and_then(|e| e.split('@').next())
            .filter(|local| !local.is_empty())
            .unwrap_or("there")
            .to_owned()
    }

    /// Whether the access token has expired at `now_secs`.
    #[must_use]
    pub fn is_expired(&self, now_secs: i64) -> bool {
        self.expires_at.is_some_and(|at| at <= now_secs)
    }
}

/// Kind of session change reported by the identity provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    SignedIn,
    SignedOut,
    PasswordRecovery,
    TokenRefreshed,
}

/// One notification from the identity provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionChange {
    pub event: SessionEvent,
    pub session: Option<Session>,
}

impl SessionChange {
    #[must_use]
    pub fn new(event: SessionEvent, session: Option<Session>) -> Self {
        Self { event, session }
    }
}

/// Whether a user is signed in, and who.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionGate {
    pub session: Option<Session>,
    /// True until the initial session lookup resolves.
    pub loading: bool,
}

impl SessionGate {
    /// Gate in its initial state, waiting on the session lookup.
    #[must_use]
    pub fn pending() -> Self {
        Self { session: None, loading: true }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn user(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn set(&mut self, session: Option<Session>) {
        self.session = session;
        self.loading = false;
    }

    pub fn clear(&mut self) {
        self.set(None);
    }
}

type Listener = Arc<dyn Fn(&SessionChange) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Fan-out hub for session changes. Cloning shares the same listener set.
#[derive(Clone, Default)]
pub struct SessionEvents {
    inner: Arc<Mutex<Registry>>,
}

impl std::fmt::Debug for SessionEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionEvents")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl SessionEvents {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback`. It stays attached until the returned
    /// `Subscription` is dropped.
    #[must_use = "dropping the subscription detaches the listener immediately"]
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&SessionChange) + Send + Sync + 'static,
    {
        let Ok(mut registry) = self.inner.lock() else {
            return Subscription { id: 0, hub: Weak::new() };
        };
        registry.next_id += 1;
        let id = registry.next_id;
        registry.listeners.push((id, Arc::new(callback)));
        Subscription { id, hub: Arc::downgrade(&self.inner) }
    }

    /// Deliver `change` to every live listener in subscription order.
    ///
    /// Listeners are called outside the lock, so a listener may subscribe or
    /// drop subscriptions while handling an event.
    pub fn emit(&self, change: &SessionChange) {
        let listeners: Vec<Listener> = match self.inner.lock() {
            Ok(registry) => registry.listeners.iter().map(|(_, l)| Arc::clone(l)).collect(),
            Err(_) => return,
        };
        for listener in listeners {
            listener(change);
        }
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().map_or(0, |r| r.listeners.len())
    }
}

/// Handle for one registered listener. Dropping it unsubscribes.
pub struct Subscription {
    id: u64,
    hub: Weak<Mutex<Registry>>,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(hub) = self.hub.upgrade() else {
            return;
        };
        if let Ok(mut registry) = hub.lock() {
            registry.listeners.retain(|(id, _)| *id != self.id);
        }
    }
}
