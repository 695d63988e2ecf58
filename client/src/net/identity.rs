//! Capability surface of the external identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! Screens never talk HTTP directly. They hold an [`Identity`] from context
//! and use the five calls below; the concrete provider lives in `gotrue`.
//!
//! DESIGN
//! ======
//! Change notifications are modelled as a cancellable subscription: every
//! `on_session_change` returns a [`SubscriptionHandle`] whose `unsubscribe`
//! is idempotent and also runs on drop, so a screen that forgets to detach
//! still stops receiving events once the handle goes out of scope.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use async_trait::async_trait;

use super::types::{Credentials, ProviderError, Session, SessionChange};

/// Payload delivered to change listeners. `Err` is a stream fault.
pub type SessionNotice = Result<SessionChange, ProviderError>;

/// Callback attached to the change stream.
pub type SessionListener = Arc<dyn Fn(SessionNotice) + Send + Sync>;

/// Shared handle to the provider, provided through Leptos context.
pub type Identity = Arc<dyn IdentityProvider>;

/// Calls the app needs from the identity provider.
///
/// Futures are `?Send`: the browser runs everything on one thread.
#[async_trait(?Send)]
pub trait IdentityProvider: Send + Sync {
    /// Current session, if any. Side-effect free.
    async fn get_session(&self) -> Option<Session>;

    /// Attach a listener to the change stream.
    fn on_session_change(&self, listener: SessionListener) -> SubscriptionHandle;

    /// # Errors
    ///
    /// Returns the provider's rejection (bad credentials, unconfirmed account).
    async fn sign_in_with_password(&self, credentials: &Credentials) -> Result<(), ProviderError>;

    /// Register a new account. `confirmation_url` is where the confirmation
    /// email sends the user back to.
    ///
    /// # Errors
    ///
    /// Returns the provider's rejection (duplicate account, weak password).
    async fn sign_up(&self, credentials: &Credentials, confirmation_url: &str) -> Result<(), ProviderError>;

    /// # Errors
    ///
    /// Returns the provider's failure; the local session is kept in that case.
    async fn sign_out(&self) -> Result<(), ProviderError>;
}

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, SessionListener)>,
}

fn lock(inner: &Mutex<Listeners>) -> MutexGuard<'_, Listeners> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Ordered set of change listeners owned by a provider.
#[derive(Clone, Default)]
pub struct ListenerRegistry {
    inner: Arc<Mutex<Listeners>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` and return the handle that releases it.
    pub fn subscribe(&self, listener: SessionListener) -> SubscriptionHandle {
        let mut guard = lock(&self.inner);
        let id = guard.next_id;
        guard.next_id += 1;
        guard.entries.push((id, listener));
        SubscriptionHandle { id, registry: Arc::downgrade(&self.inner), active: AtomicBool::new(true) }
    }

    /// Deliver `notice` to every listener in subscription order.
    ///
    /// The lock is released before listeners run, so a listener may
    /// unsubscribe (itself or others) while being notified.
    pub fn emit(&self, notice: &SessionNotice) {
        let listeners: Vec<SessionListener> = lock(&self.inner)
            .entries
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(notice.clone());
        }
    }

    /// Number of live subscriptions.
    pub fn len(&self) -> usize {
        lock(&self.inner).entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Live attachment to a provider's change stream.
pub struct SubscriptionHandle {
    id: u64,
    registry: Weak<Mutex<Listeners>>,
    active: AtomicBool,
}

impl SubscriptionHandle {
    /// Detach from the stream. Calls after the first are no-ops.
    pub fn unsubscribe(&self) {
        if !self.active.swap(false, Ordering::AcqRel) {
            return;
        }
        if let Some(inner) = self.registry.upgrade() {
            lock(&inner).entries.retain(|(id, _)| *id != self.id);
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }
}

impl Drop for SubscriptionHandle {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl std::fmt::Debug for SubscriptionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubscriptionHandle")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish_non_exhaustive()
    }
}
