//! Host configuration parsed from environment variables.

use dashboard_client::config::{ConfigError, IdentityConfig};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub identity: IdentityConfig,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Required:
    /// - `IDENTITY_URL`, `IDENTITY_ANON_KEY` (see [`IdentityConfig::from_env`])
    ///
    /// Optional:
    /// - `PORT`: default 3000
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a missing identity setting or an
    /// unparseable port.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let identity = IdentityConfig::from_env()?;
        Ok(Self { port, identity })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .trim()
            .parse::<u16>()
            .map_err(|e| ConfigError::Invalid { var: "PORT", reason: format!("'{value}': {e}") }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
