//! Environment configuration.

use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

/// Address the API binds to when `BIND_ADDRESS` is not set
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";

/// Server configuration read at startup
pub struct Config {
    /// SeaORM connection URL, Postgres or SQLite
    pub database_url: String,
    /// Address the HTTP listener binds to
    pub bind_address: SocketAddr,
}

impl Config {
    /// Read the server configuration from environment variables.
    ///
    /// `DATABASE_URL` is required, `BIND_ADDRESS` defaults to [`DEFAULT_BIND_ADDRESS`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_address =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());

        Self::new(database_url, &bind_address)
    }

    /// Build a configuration from raw values, validating the bind address.
    pub fn new(database_url: String, bind_address: &str) -> Result<Self, ConfigError> {
        if database_url.trim().is_empty() {
            return Err(ConfigError::InvalidEnvValue {
                var: "DATABASE_URL".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        let bind_address =
            bind_address
                .parse::<SocketAddr>()
                .map_err(|err| ConfigError::InvalidEnvValue {
                    var: "BIND_ADDRESS".to_string(),
                    reason: err.to_string(),
                })?;

        Ok(Self {
            database_url,
            bind_address,
        })
    }
}
