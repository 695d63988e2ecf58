//! Session mirror for the currently mounted screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each route screen creates its own [`SessionStore`] on mount; it is
//! disposed with the screen's reactive owner. Only the session sync
//! (change stream + initial query) and logout write to it, through
//! [`SessionWriter`]. Route guards and rendering read it.
//!
//! DESIGN
//! ======
//! "Not resolved yet" and "no session" are distinct states so guards can
//! hold off redirecting until the first answer arrives.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::{AuthChangeEvent, Session};

/// Three-state view of session existence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// No query result or event has arrived yet.
    #[default]
    Unknown,
    Absent,
    Present(Session),
}

impl SessionStatus {
    pub fn from_session(session: Option<Session>) -> Self {
        session.map_or(Self::Absent, Self::Present)
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    pub fn has_session(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Present(session) => Some(session),
            _ => None,
        }
    }
}

/// Where a mirror update came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionSource {
    InitialQuery,
    ChangeStream(AuthChangeEvent),
    SignOut,
}

/// Mirror contents plus bookkeeping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub status: SessionStatus,
    /// Count of applied writes.
    pub revision: u64,
    pub last_source: Option<SessionSource>,
    /// Last change-stream fault; the mirror may be stale while set.
    pub sync_fault: Option<String>,
}

impl AuthState {
    /// Overwrite the mirror. Last write wins; nothing is merged.
    pub fn apply(&mut self, source: SessionSource, session: Option<Session>) {
        self.status = SessionStatus::from_session(session);
        self.revision += 1;
        self.last_source = Some(source);
    }

    pub fn record_fault(&mut self, message: String) {
        self.sync_fault = Some(message);
    }
}

/// Single mutation entry point for the session mirror.
pub trait SessionWriter: Clone + Send + Sync + 'static {
    fn write(&self, source: SessionSource, session: Option<Session>);
    fn record_fault(&self, message: String);
}

/// Reactive, screen-scoped session store.
#[derive(Clone, Copy, Debug)]
pub struct SessionStore {
    state: RwSignal<AuthState>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self { state: RwSignal::new(AuthState::default()) }
    }

    /// Tracked read of the session status.
    pub fn status(&self) -> SessionStatus {
        self.state.with(|s| s.status.clone())
    }

    pub fn sync_fault(&self) -> Option<String> {
        self.state.with(|s| s.sync_fault.clone())
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionWriter for SessionStore {
    fn write(&self, source: SessionSource, session: Option<Session>) {
        if self.state.try_update(|s| s.apply(source, session)).is_none() {
            log::debug!("session store disposed; dropped {source:?} update");
        }
    }

    fn record_fault(&self, message: String) {
        if self.state.try_update(|s| s.record_fault(message)).is_none() {
            log::debug!("session store disposed; dropped fault");
        }
    }
}
