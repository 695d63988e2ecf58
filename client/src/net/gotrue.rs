//! HTTP client for the identity provider's REST surface.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, session persisted
//! in `localStorage`.
//! Server-side (SSR): stubs with no session, since sign-in only makes sense
//! in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure comes back as a [`ProviderError`] carrying the provider's
//! message verbatim; nothing here panics. A session that was accepted by the
//! provider but could not be persisted is reported on the change stream as a
//! fault, because reloads would silently lose it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "gotrue_test.rs"]
mod gotrue_test;

use async_trait::async_trait;

use super::identity::{IdentityProvider, ListenerRegistry, SessionListener, SubscriptionHandle};
#[cfg(feature = "hydrate")]
use super::types::SessionChange;
use super::types::{Credentials, ProviderError, Session};
use crate::config::IdentityConfig;

#[cfg(any(test, feature = "hydrate"))]
fn token_endpoint(base: &str) -> String {
    format!("{base}/auth/v1/token")
}

#[cfg(any(test, feature = "hydrate"))]
fn signup_endpoint(base: &str) -> String {
    format!("{base}/auth/v1/signup")
}

#[cfg(any(test, feature = "hydrate"))]
fn logout_endpoint(base: &str) -> String {
    format!("{base}/auth/v1/logout")
}

/// Logout statuses meaning the token is already unusable; the local session
/// is cleared as if sign-out succeeded.
#[cfg(any(test, feature = "hydrate"))]
fn logout_status_is_terminal(status: u16) -> bool {
    matches!(status, 401 | 403 | 404)
}

/// A sign-up response carries a session only when the provider auto-confirms.
#[cfg(any(test, feature = "hydrate"))]
fn session_from_signup(body: serde_json::Value) -> Option<Session> {
    body.get("access_token")?;
    serde_json::from_value(body).ok()
}

#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn now_secs() -> u64 {
    (js_sys::Date::now() / 1000.0) as u64
}

/// Body of a failed response; an unreadable body becomes empty and the
/// status alone drives the message.
#[cfg(feature = "hydrate")]
async fn read_error_body(resp: gloo_net::http::Response) -> String {
    match resp.text().await {
        Ok(body) => body,
        Err(e) => {
            log::debug!("failed to read error body (status {}): {e}", resp.status());
            String::new()
        }
    }
}

/// Identity provider backed by the GoTrue-compatible REST API.
pub struct GoTrueClient {
    #[cfg_attr(not(any(test, feature = "hydrate")), allow(dead_code))]
    config: IdentityConfig,
    listeners: ListenerRegistry,
}

impl GoTrueClient {
    pub fn new(config: IdentityConfig) -> Self {
        Self { config, listeners: ListenerRegistry::new() }
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn base_url(&self) -> Result<&str, ProviderError> {
        if self.config.is_configured() {
            Ok(&self.config.url)
        } else {
            Err(ProviderError::not_configured())
        }
    }

    /// Persist `session` and announce it on the change stream.
    #[cfg(feature = "hydrate")]
    fn establish(&self, session: Session) {
        let key = self.config.storage_key();
        let persisted = crate::util::persistence::save_json(&key, &session);
        self.listeners.emit(&Ok(SessionChange::signed_in(session)));
        if let Err(e) = persisted {
            self.listeners
                .emit(&Err(ProviderError::new(format!("session could not be persisted: {e}"))));
        }
    }

    #[cfg(feature = "hydrate")]
    fn clear(&self) {
        crate::util::persistence::remove(&self.config.storage_key());
        self.listeners.emit(&Ok(SessionChange::signed_out()));
    }

    #[cfg(feature = "hydrate")]
    async fn post_credentials(
        &self,
        url: &str,
        query: &[(&str, &str)],
        credentials: &Credentials,
    ) -> Result<gloo_net::http::Response, ProviderError> {
        let resp = gloo_net::http::Request::post(url)
            .query(query.iter().copied())
            .header("apikey", &self.config.anon_key)
            .json(credentials)
            .map_err(ProviderError::transport)?
            .send()
            .await
            .map_err(ProviderError::transport)?;
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let body = read_error_body(resp).await;
        Err(ProviderError::from_response(status, &body))
    }
}

#[async_trait(?Send)]
impl IdentityProvider for GoTrueClient {
    async fn get_session(&self) -> Option<Session> {
        #[cfg(feature = "hydrate")]
        {
            let key = self.config.storage_key();
            let session = crate::util::persistence::load_json::<Session>(&key)?;
            if session.is_expired_at(now_secs()) {
                log::info!("stored session expired; discarding");
                crate::util::persistence::remove(&key);
                return None;
            }
            Some(session)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn on_session_change(&self, listener: SessionListener) -> SubscriptionHandle {
        self.listeners.subscribe(listener)
    }

    async fn sign_in_with_password(&self, credentials: &Credentials) -> Result<(), ProviderError> {
        #[cfg(feature = "hydrate")]
        {
            let url = token_endpoint(self.base_url()?);
            let resp = self
                .post_credentials(&url, &[("grant_type", "password")], credentials)
                .await?;
            let session: Session = resp.json().await.map_err(ProviderError::transport)?;
            self.establish(session.with_expiry(now_secs()));
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(ProviderError::unavailable_on_server())
        }
    }

    async fn sign_up(&self, credentials: &Credentials, confirmation_url: &str) -> Result<(), ProviderError> {
        #[cfg(feature = "hydrate")]
        {
            let url = signup_endpoint(self.base_url()?);
            let resp = self
                .post_credentials(&url, &[("redirect_to", confirmation_url)], credentials)
                .await?;
            let body: serde_json::Value = resp.json().await.map_err(ProviderError::transport)?;
            if let Some(session) = session_from_signup(body) {
                self.establish(session.with_expiry(now_secs()));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, confirmation_url);
            Err(ProviderError::unavailable_on_server())
        }
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        #[cfg(feature = "hydrate")]
        {
            let key = self.config.storage_key();
            let Some(session) = crate::util::persistence::load_json::<Session>(&key) else {
                self.clear();
                return Ok(());
            };
            let url = logout_endpoint(self.base_url()?);
            let resp = gloo_net::http::Request::post(&url)
                .header("apikey", &self.config.anon_key)
                .header("Authorization", &format!("Bearer {}", session.access_token))
                .send()
                .await
                .map_err(ProviderError::transport)?;
            if !resp.ok() && !logout_status_is_terminal(resp.status()) {
                let status = resp.status();
                let body = read_error_body(resp).await;
                return Err(ProviderError::from_response(status, &body));
            }
            self.clear();
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ProviderError::unavailable_on_server())
        }
    }
}
