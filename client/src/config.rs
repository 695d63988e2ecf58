//! Identity-provider configuration and the named route paths.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host reads `IDENTITY_URL` / `IDENTITY_ANON_KEY` from its environment
//! and embeds them in the SSR shell as `<meta>` tags. The hydrated client
//! reads the same tags back, so both halves talk to one provider without a
//! compile-time secret.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

/// Public login route.
pub const LOGIN_PATH: &str = "/auth";
/// Protected dashboard root.
pub const ROOT_PATH: &str = "/";

/// `<meta name=...>` carrying the provider base URL in the SSR shell.
pub const META_IDENTITY_URL: &str = "identity-url";
/// `<meta name=...>` carrying the provider public key in the SSR shell.
pub const META_IDENTITY_ANON_KEY: &str = "identity-anon-key";

/// Errors raised while reading identity configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing config: env var {var} not set")]
    Missing { var: &'static str },

    /// A variable is set but its value is unusable.
    #[error("invalid config {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Connection settings for the external identity provider.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// Provider base URL without a trailing slash.
    pub url: String,
    /// Public (anonymous) API key sent as the `apikey` header.
    pub anon_key: String,
}

impl IdentityConfig {
    /// Build config from environment variables.
    ///
    /// Required:
    /// - `IDENTITY_URL`: `http://` or `https://` base URL
    /// - `IDENTITY_ANON_KEY`: public API key
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is missing or malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = std::env::var("IDENTITY_URL").map_err(|_| ConfigError::Missing { var: "IDENTITY_URL" })?;
        let anon_key =
            std::env::var("IDENTITY_ANON_KEY").map_err(|_| ConfigError::Missing { var: "IDENTITY_ANON_KEY" })?;
        Self::new(&url, &anon_key)
    }

    /// Validate and normalize raw values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a non-http(s) URL or an empty key.
    pub fn new(url: &str, anon_key: &str) -> Result<Self, ConfigError> {
        let url = url.trim().trim_end_matches('/');
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::Invalid {
                var: "IDENTITY_URL",
                reason: format!("expected an http(s) URL, got '{url}'"),
            });
        }
        let anon_key = anon_key.trim();
        if anon_key.is_empty() {
            return Err(ConfigError::Invalid { var: "IDENTITY_ANON_KEY", reason: "empty value".to_owned() });
        }
        Ok(Self { url: url.to_owned(), anon_key: anon_key.to_owned() })
    }

    /// Whether a provider URL is present.
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty()
    }

    /// First label of the provider host, e.g. `abcd` for `https://abcd.example.co`.
    pub fn project_ref(&self) -> &str {
        let rest = self.url.split_once("://").map_or(self.url.as_str(), |(_, rest)| rest);
        let host = rest.split(['/', ':']).next().unwrap_or_default();
        host.split('.').next().unwrap_or_default()
    }

    /// Browser storage key the persisted session lives under.
    pub fn storage_key(&self) -> String {
        format!("sb-{}-auth-token", self.project_ref())
    }

    /// Read config back from the `<meta>` tags written by the SSR shell.
    #[cfg(feature = "hydrate")]
    pub fn from_document() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let read = |name: &str| {
            document
                .query_selector(&format!("meta[name=\"{name}\"]"))
                .ok()
                .flatten()
                .and_then(|el| el.get_attribute("content"))
        };
        let url = read(META_IDENTITY_URL)?;
        let anon_key = read(META_IDENTITY_ANON_KEY)?;
        match Self::new(&url, &anon_key) {
            Ok(config) => Some(config),
            Err(e) => {
                log::error!("identity config in document is invalid: {e}");
                None
            }
        }
    }
}

/// Sign-up confirmation callback: the protected root on `origin`.
pub fn confirmation_url(origin: &str) -> String {
    format!("{}{ROOT_PATH}", origin.trim_end_matches('/'))
}

/// Canonical URL of the login page on `origin`.
pub fn login_canonical_url(origin: &str) -> String {
    format!("{}{LOGIN_PATH}", origin.trim_end_matches('/'))
}

/// Current browser origin, or an empty string outside the browser.
pub fn current_origin() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
