//! Wire types shared with the external identity provider.
//!
//! DESIGN
//! ======
//! `Session` mirrors the provider's token response so it can be persisted and
//! restored losslessly. The app only ever asks whether one exists; the token
//! fields stay opaque to everything outside `net`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Authenticated identity as issued by the provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token for provider calls.
    pub access_token: String,
    /// Token scheme, normally `"bearer"`.
    #[serde(default)]
    pub token_type: String,
    /// Lifetime in seconds at issue time.
    #[serde(default)]
    pub expires_in: Option<u64>,
    /// Absolute expiry as unix seconds.
    #[serde(default)]
    pub expires_at: Option<u64>,
    /// Token used by the provider to mint a new access token.
    #[serde(default)]
    pub refresh_token: String,
    /// Identity the session belongs to.
    pub user: SessionUser,
}

/// Subset of the provider's user record the UI cares about.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl Session {
    /// Fill `expires_at` from `expires_in` when the response omitted it.
    #[must_use]
    pub fn with_expiry(mut self, now_secs: u64) -> Self {
        if self.expires_at.is_none() {
            self.expires_at = self.expires_in.map(|ttl| now_secs.saturating_add(ttl));
        }
        self
    }

    /// Whether the session is past its expiry at `now_secs`.
    /// Sessions without an expiry never expire locally.
    pub fn is_expired_at(&self, now_secs: u64) -> bool {
        self.expires_at.is_some_and(|at| at <= now_secs)
    }
}

/// Kind of change reported on the provider's notification stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthChangeEvent {
    InitialSession,
    SignedIn,
    SignedOut,
    TokenRefreshed,
    UserUpdated,
}

/// One notification from the change stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionChange {
    pub event: AuthChangeEvent,
    pub session: Option<Session>,
}

impl SessionChange {
    pub fn signed_in(session: Session) -> Self {
        Self { event: AuthChangeEvent::SignedIn, session: Some(session) }
    }

    pub fn signed_out() -> Self {
        Self { event: AuthChangeEvent::SignedOut, session: None }
    }
}

/// Email + password pair submitted to the provider.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Failure reported by the identity provider. `Display` is the provider's
/// message verbatim so it can be shown to the user unchanged.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ProviderError {
    pub message: String,
    /// HTTP status when the failure came from a response.
    pub status: Option<u16>,
}

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), status: None }
    }

    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        Self { message: message.into(), status: Some(status) }
    }

    /// Client-side transport or decode failure.
    pub fn transport(err: impl fmt::Display) -> Self {
        Self::new(err.to_string())
    }

    pub fn not_configured() -> Self {
        Self::new("Identity provider is not configured")
    }

    pub fn unavailable_on_server() -> Self {
        Self::new("not available on server")
    }

    /// Decode a provider error body, falling back to the bare status.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(ErrorBody::into_message)
            .unwrap_or_else(|| request_failed_message(status));
        Self::with_status(status, message)
    }
}

/// Error envelope; the provider uses different fields per endpoint.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        [self.error_description, self.msg, self.message, self.error]
            .into_iter()
            .flatten()
            .find(|m| !m.trim().is_empty())
    }
}

fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}
