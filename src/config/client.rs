//! Terminal client configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Settings for the conversation client talking to the relay.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Base URL where the relay is served
    #[serde(default = "default_relay_url")]
    pub relay_url: String,
}

impl ClientConfig {
    /// URL of the relay's chat endpoint.
    pub fn chat_endpoint(&self) -> String {
        format!("{}/api/chat", self.relay_url.trim_end_matches('/'))
    }

    /// Validate client configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.relay_url.starts_with("http://") && !self.relay_url.starts_with("https://") {
            return Err(ValidationError::InvalidRelayUrl);
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            relay_url: default_relay_url(),
        }
    }
}

fn default_relay_url() -> String {
    "http://127.0.0.1:3000".to_string()
}
