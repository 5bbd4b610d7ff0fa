//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional:
//!
//! - `FRIENDGRAPH_HOST` - Bind address (default: 127.0.0.1)
//! - `FRIENDGRAPH_PORT` - Listen port (default: 8080); the generic
//!   `SERVER_PORT` is honored as a fallback for existing deployments

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// FriendGraph server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("FRIENDGRAPH_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("FRIENDGRAPH_HOST".to_owned(), e.to_string())
            })?;
        let port = get_port_env()?;

        Ok(Self { host, port })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get the listen port with fallback to the generic `SERVER_PORT`.
fn get_port_env() -> Result<u16, ConfigError> {
    // Try the crate-prefixed variable first, then the generic one
    let (key, raw) = match std::env::var("FRIENDGRAPH_PORT") {
        Ok(value) => ("FRIENDGRAPH_PORT", value),
        Err(_) => match std::env::var("SERVER_PORT") {
            Ok(value) => ("SERVER_PORT", value),
            Err(_) => return Ok(8080),
        },
    };

    raw.parse::<u16>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_owned(), e.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}
