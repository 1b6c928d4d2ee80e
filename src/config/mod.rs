//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PROLOG_ASSIST` prefix and nested values use double underscores as separators.
//!
//! The configuration is read once at startup and handed to the relay as an
//! immutable value; request handling never looks at the process environment.
//!
//! # Example
//!
//! ```no_run
//! use prolog_assist::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate_relay().expect("Invalid configuration");
//!
//! println!("Relay listening on {}:{}", config.server.host, config.server.port);
//! ```

mod backend;
mod client;
mod error;
mod server;

pub use backend::BackendConfig;
pub use client::ClientConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Environment variable honoured as a fallback for the backend URL.
pub const LEGACY_BACKEND_URL_VAR: &str = "BACKEND_URL";

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream debugging assistant backend
    #[serde(default)]
    pub backend: BackendConfig,

    /// Terminal client settings
    #[serde(default)]
    pub client: ClientConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PROLOG_ASSIST` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Falls back to `BACKEND_URL` when no prefixed backend URL is set
    ///
    /// # Environment Variable Format
    ///
    /// - `PROLOG_ASSIST__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `PROLOG_ASSIST__BACKEND__URL=...` -> `backend.url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut config: AppConfig = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PROLOG_ASSIST")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        if !config.backend.is_configured() {
            if let Ok(url) = std::env::var(LEGACY_BACKEND_URL_VAR) {
                config.backend.url = Some(url);
            }
        }

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// A missing backend URL is not a validation failure; the relay reports it
    /// per request.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validate_relay()?;
        self.client.validate()?;
        Ok(())
    }

    /// Validate only the sections the relay server reads (`server`, `backend`).
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if a server or backend value is invalid.
    pub fn validate_relay(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.backend.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
