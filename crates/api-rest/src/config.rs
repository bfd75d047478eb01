//! REST runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the router. Handlers
//! never read environment variables, so behaviour cannot drift between requests or between
//! tests running in one process.

use std::net::SocketAddr;

/// Environment variable holding the bind address.
pub const REST_ADDR_ENV: &str = "CHARGEDFILE_REST_ADDR";

/// Environment variable holding the request body limit in bytes.
pub const MAX_UPLOAD_BYTES_ENV: &str = "CHARGEDFILE_MAX_UPLOAD_BYTES";

pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";

/// 64 MiB
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 64 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid CHARGEDFILE_REST_ADDR '{value}': {source}")]
    InvalidAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("invalid CHARGEDFILE_MAX_UPLOAD_BYTES '{0}': must be a positive integer")]
    InvalidMaxUploadBytes(String),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// REST configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct RestConfig {
    addr: SocketAddr,
    max_upload_bytes: usize,
}

impl RestConfig {
    /// Create a new `RestConfig`.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidMaxUploadBytes`] if `max_upload_bytes` is zero.
    pub fn new(addr: SocketAddr, max_upload_bytes: usize) -> ConfigResult<Self> {
        if max_upload_bytes == 0 {
            return Err(ConfigError::InvalidMaxUploadBytes("0".into()));
        }

        Ok(Self {
            addr,
            max_upload_bytes,
        })
    }

    /// Resolve configuration from the process environment.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_env_values(
            std::env::var(REST_ADDR_ENV).ok(),
            std::env::var(MAX_UPLOAD_BYTES_ENV).ok(),
        )
    }

    /// Resolve configuration from optional raw values.
    ///
    /// `None` or empty/whitespace values fall back to the defaults.
    pub fn from_env_values(
        addr: Option<String>,
        max_upload_bytes: Option<String>,
    ) -> ConfigResult<Self> {
        let addr = non_blank(addr).unwrap_or_else(|| DEFAULT_REST_ADDR.to_string());
        let addr = addr
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidAddr {
                value: addr.clone(),
                source,
            })?;

        let max_upload_bytes = match non_blank(max_upload_bytes) {
            Some(raw) => raw
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidMaxUploadBytes(raw.clone()))?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        Self::new(addr, max_upload_bytes)
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
