//! Upstream backend configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::relay::upstream_chat_url;

/// Upstream backend configuration
///
/// A missing URL does not stop the relay from starting; each chat request
/// reports it instead.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the debugging assistant backend
    pub url: Option<String>,

    /// Upstream request timeout in seconds (transport default when unset)
    pub timeout_secs: Option<u64>,
}

impl BackendConfig {
    /// Creates a configuration pointing at the given base URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            timeout_secs: None,
        }
    }

    /// The configured base URL, treating an empty value as absent.
    pub fn base_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.is_empty())
    }

    /// Full URL of the upstream chat operation, if a backend is configured.
    pub fn chat_url(&self) -> Option<String> {
        self.base_url().map(upstream_chat_url)
    }

    /// Check if a backend URL is present
    pub fn is_configured(&self) -> bool {
        self.base_url().is_some()
    }

    /// Get timeout as Duration
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Validate backend configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == Some(0) {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}
