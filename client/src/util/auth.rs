//! Session synchronization and credential flows shared by route screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every screen that cares about the session mounts one [`SessionSync`]:
//! it attaches to the provider's change stream first, then runs the
//! one-shot "current session" query, so an event fired in between cannot
//! be missed. Both sources write into the screen's store with the same
//! last-write-wins rule.
//!
//! ERROR HANDLING
//! ==============
//! Provider call failures become user-facing [`Feedback`] with the
//! provider's message verbatim. Stream faults have no local recovery; they
//! are logged at error level and recorded on the store for the operator.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use super::route_guard::Screen;
use crate::net::identity::{Identity, IdentityProvider, SessionListener, SessionNotice, SubscriptionHandle};
use crate::net::types::{Credentials, ProviderError};
use crate::state::auth::{SessionSource, SessionStore, SessionWriter};
use crate::state::credentials::AuthMode;
use crate::state::toast::Notice;

pub const WELCOME_BACK: &str = "Welcome back!";
pub const CHECK_EMAIL: &str = "Check your email to confirm your account.";
pub const SIGNED_OUT: &str = "Signed out";

/// One screen's attachment to the provider's session state.
///
/// Detaches on [`SessionSync::detach`] or on drop, whichever comes first.
/// After that neither stream events nor a late initial query reach the
/// writer.
pub struct SessionSync<W: SessionWriter> {
    writer: W,
    attached: Arc<AtomicBool>,
    handle: Option<SubscriptionHandle>,
}

impl<W: SessionWriter> SessionSync<W> {
    /// Attach a single change listener that forwards into `writer`.
    pub fn mount(identity: &dyn IdentityProvider, writer: W) -> Self {
        let attached = Arc::new(AtomicBool::new(true));
        let listener: SessionListener = {
            let writer = writer.clone();
            let attached = Arc::clone(&attached);
            Arc::new(move |notice: SessionNotice| {
                if !attached.load(Ordering::Acquire) {
                    return;
                }
                match notice {
                    Ok(change) => writer.write(SessionSource::ChangeStream(change.event), change.session),
                    Err(err) => {
                        log::error!("session change stream failed: {err}");
                        writer.record_fault(err.message);
                    }
                }
            })
        };
        let handle = identity.on_session_change(listener);
        Self { writer, attached, handle: Some(handle) }
    }

    /// The initial "current session" query. Only obtainable from a mounted
    /// sync, so the listener is always attached before the query starts.
    pub fn resolve_initial(&self, identity: Identity) -> impl Future<Output = ()> + 'static {
        let writer = self.writer.clone();
        let attached = Arc::clone(&self.attached);
        async move {
            let session = identity.get_session().await;
            if attached.load(Ordering::Acquire) {
                writer.write(SessionSource::InitialQuery, session);
            } else {
                log::debug!("screen unmounted before initial session resolved; result dropped");
            }
        }
    }

    pub fn is_attached(&self) -> bool {
        self.handle.as_ref().is_some_and(SubscriptionHandle::is_active)
    }

    /// Release the subscription. Safe to call repeatedly.
    pub fn detach(&mut self) {
        self.attached.store(false, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            handle.unsubscribe();
        }
    }
}

impl<W: SessionWriter> Drop for SessionSync<W> {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Mount session sync for the current reactive owner and detach on cleanup.
pub fn install_session_sync(identity: Identity, store: SessionStore) {
    let mut sync = SessionSync::mount(identity.as_ref(), store);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(sync.resolve_initial(identity));
    #[cfg(not(feature = "hydrate"))]
    let _ = identity;
    on_cleanup(move || sync.detach());
}

/// What a screen shows and where it goes after an auth action settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub notice: Notice,
    pub redirect: Option<Screen>,
}

/// Dispatch validated credentials for `mode`.
///
/// # Errors
///
/// Returns the provider's rejection unchanged.
pub async fn submit_credentials(
    identity: &dyn IdentityProvider,
    mode: AuthMode,
    credentials: &Credentials,
    confirmation_url: &str,
) -> Result<(), ProviderError> {
    let result = match mode {
        AuthMode::SignIn => identity.sign_in_with_password(credentials).await,
        AuthMode::SignUp => identity.sign_up(credentials, confirmation_url).await,
    };
    if let Err(err) = &result {
        log::warn!("{} rejected: {err}", mode.as_str());
    }
    result
}

/// Map a settled submission to user feedback.
pub fn submit_feedback(mode: AuthMode, result: &Result<(), ProviderError>) -> Feedback {
    match (mode, result) {
        (_, Err(err)) => Feedback { notice: Notice::destructive(err.message.clone()), redirect: None },
        (AuthMode::SignIn, Ok(())) => Feedback { notice: Notice::info(WELCOME_BACK), redirect: Some(Screen::Dashboard) },
        // No session until the email is confirmed, so stay on login.
        (AuthMode::SignUp, Ok(())) => Feedback { notice: Notice::info(CHECK_EMAIL), redirect: None },
    }
}

/// Sign out and clear the mirror on success. On failure the mirror is
/// left alone and the provider's message is surfaced.
pub async fn logout<W: SessionWriter>(identity: &dyn IdentityProvider, writer: &W) -> Feedback {
    match identity.sign_out().await {
        Ok(()) => {
            writer.write(SessionSource::SignOut, None);
            Feedback { notice: Notice::info(SIGNED_OUT), redirect: Some(Screen::Login) }
        }
        Err(err) => {
            log::warn!("sign-out failed: {err}");
            Feedback { notice: Notice::destructive(err.message), redirect: None }
        }
    }
}
