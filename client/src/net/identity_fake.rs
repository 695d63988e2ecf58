//! In-memory identity provider for unit tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures::channel::oneshot;

use super::identity::{IdentityProvider, ListenerRegistry, SessionListener, SubscriptionHandle};
use super::types::{Credentials, ProviderError, Session, SessionChange, SessionUser};

/// Calls observed by [`FakeIdentity`], in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Call {
    GetSession,
    SignIn(String),
    SignUp { email: String, confirmation_url: String },
    SignOut,
}

/// Scripted provider: results are configured up front, sessions are
/// emitted on the change stream like the real provider does.
#[derive(Default)]
pub(crate) struct FakeIdentity {
    listeners: ListenerRegistry,
    stored: Mutex<Option<Session>>,
    query_gate: Mutex<Option<oneshot::Receiver<Option<Session>>>>,
    sign_in_error: Mutex<Option<ProviderError>>,
    sign_up_error: Mutex<Option<ProviderError>>,
    sign_out_error: Mutex<Option<ProviderError>>,
    calls: Mutex<Vec<Call>>,
}

pub(crate) fn session_for(email: &str) -> Session {
    Session {
        access_token: format!("token-{email}"),
        token_type: "bearer".to_owned(),
        expires_in: Some(3600),
        expires_at: None,
        refresh_token: "refresh".to_owned(),
        user: SessionUser { id: format!("id-{email}"), email: Some(email.to_owned()) },
    }
}

impl FakeIdentity {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn with_session(session: Session) -> Arc<Self> {
        let fake = Self::default();
        *fake.stored.lock().unwrap() = Some(session);
        Arc::new(fake)
    }

    /// Hold the next `get_session` until the returned sender fires.
    pub(crate) fn gate_query(&self) -> oneshot::Sender<Option<Session>> {
        let (tx, rx) = oneshot::channel();
        *self.query_gate.lock().unwrap() = Some(rx);
        tx
    }

    pub(crate) fn fail_sign_in(&self, message: &str) {
        *self.sign_in_error.lock().unwrap() = Some(ProviderError::with_status(400, message));
    }

    pub(crate) fn fail_sign_up(&self, message: &str) {
        *self.sign_up_error.lock().unwrap() = Some(ProviderError::with_status(422, message));
    }

    pub(crate) fn fail_sign_out(&self, message: &str) {
        *self.sign_out_error.lock().unwrap() = Some(ProviderError::with_status(500, message));
    }

    pub(crate) fn emit(&self, change: SessionChange) {
        self.listeners.emit(&Ok(change));
    }

    pub(crate) fn emit_fault(&self, message: &str) {
        self.listeners.emit(&Err(ProviderError::new(message)));
    }

    pub(crate) fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait(?Send)]
impl IdentityProvider for FakeIdentity {
    async fn get_session(&self) -> Option<Session> {
        self.record(Call::GetSession);
        let gate = self.query_gate.lock().unwrap().take();
        match gate {
            Some(rx) => rx.await.ok().flatten(),
            None => self.stored.lock().unwrap().clone(),
        }
    }

    fn on_session_change(&self, listener: SessionListener) -> SubscriptionHandle {
        self.listeners.subscribe(listener)
    }

    async fn sign_in_with_password(&self, credentials: &Credentials) -> Result<(), ProviderError> {
        self.record(Call::SignIn(credentials.email.clone()));
        if let Some(err) = self.sign_in_error.lock().unwrap().clone() {
            return Err(err);
        }
        let session = session_for(&credentials.email);
        *self.stored.lock().unwrap() = Some(session.clone());
        self.emit(SessionChange::signed_in(session));
        Ok(())
    }

    async fn sign_up(&self, credentials: &Credentials, confirmation_url: &str) -> Result<(), ProviderError> {
        self.record(Call::SignUp { email: credentials.email.clone(), confirmation_url: confirmation_url.to_owned() });
        match self.sign_up_error.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        self.record(Call::SignOut);
        if let Some(err) = self.sign_out_error.lock().unwrap().clone() {
            return Err(err);
        }
        *self.stored.lock().unwrap() = None;
        self.emit(SessionChange::signed_out());
        Ok(())
    }
}
