//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `TIMBERHAUS_HOST` - Bind address (default: 127.0.0.1)
//! - `TIMBERHAUS_PORT` - Listen port (default: 3000)
//! - `TIMBERHAUS_BASE_URL` - Public URL (default: `http://localhost:3000`);
//!   an https base URL turns on the `Secure` session cookie flag
//! - `TIMBERHAUS_DATABASE_URL` - `PostgreSQL` connection string for contact
//!   message storage, with a fallback to the generic `DATABASE_URL`.
//!   Without either, contact messages are logged instead of persisted.

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// `PostgreSQL` connection URL for contact messages (contains password)
    pub database_url: Option<SecretString>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("TIMBERHAUS_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("TIMBERHAUS_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("TIMBERHAUS_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("TIMBERHAUS_PORT".to_string(), e.to_string()))?;
        let base_url = get_env_or_default("TIMBERHAUS_BASE_URL", "http://localhost:3000");
        let database_url = get_database_url("TIMBERHAUS_DATABASE_URL");

        Ok(Self {
            host,
            port,
            base_url,
            database_url,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get an optional database URL with fallback to the generic `DATABASE_URL`.
fn get_database_url(primary_key: &str) -> Option<SecretString> {
    std::env::var(primary_key)
        .or_else(|_| std::env::var("DATABASE_URL"))
        .ok()
        .map(SecretString::from)
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
