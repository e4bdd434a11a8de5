//! Configuration for shimmy-relay.
//!
//! The relay is configured entirely from the process environment, read once
//! at startup into an immutable [`Config`] that is injected into the handlers.

use std::net::{Ipv4Addr, SocketAddr};

/// Environment variable holding the listen port.
pub const PORT_ENV: &str = "PORT";
/// Environment variable holding the upstream base URL.
pub const BASE_URL_ENV: &str = "SHIMMY_BASE_URL";

/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;
/// Upstream used when `SHIMMY_BASE_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "http://localhost:11435";

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Port the relay listens on (all interfaces)
    pub listen_port: u16,
    /// Base URL of the Shimmy server, without a trailing slash
    pub upstream_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_port: DEFAULT_PORT,
            upstream_base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Build a config from explicit values, normalizing the base URL.
    pub fn new(
        listen_port: u16,
        upstream_base_url: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let upstream_base_url = normalize_base_url(&upstream_base_url.into())?;
        Ok(Self {
            listen_port,
            upstream_base_url,
        })
    }

    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration using a custom variable lookup.
    ///
    /// Empty or whitespace-only values count as unset and fall back to the
    /// defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let listen_port = match read(PORT_ENV) {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::InvalidPort {
                value: raw,
                source: e,
            })?,
            None => DEFAULT_PORT,
        };

        let base_url = read(BASE_URL_ENV).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self::new(listen_port, base_url)
    }

    /// Socket address the server binds to.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.listen_port))
    }

    /// Full upstream URL for a route path such as `/v1/models`.
    pub fn upstream_url(&self, path: &str) -> String {
        format!("{}{}", self.upstream_base_url, path)
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidUpstream(raw.to_string()));
    }
    Ok(trimmed.to_string())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value '{value}': {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Invalid SHIMMY_BASE_URL value '{0}': expected an http:// or https:// URL")]
    InvalidUpstream(String),
}
