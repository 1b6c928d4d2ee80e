//! Relay client backed by `reqwest`.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::domain::chat::Query;
use crate::ports::{RelayAnswer, RelayClient, RelayClientError};

/// HTTP implementation of [`RelayClient`] posting to `/api/chat`.
#[derive(Debug, Clone)]
pub struct ReqwestRelayClient {
    client: Client,
    endpoint: String,
}

impl ReqwestRelayClient {
    /// Creates a client for the relay described by `config`.
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_endpoint(config.chat_endpoint())
    }

    /// Creates a client for an explicit chat endpoint URL.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RelayClient for ReqwestRelayClient {
    async fn ask(&self, query: &Query) -> Result<RelayAnswer, RelayClientError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&query.payload())
            .send()
            .await
            .map_err(|e| RelayClientError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayClientError::Status(status.as_u16()));
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| RelayClientError::Parse(e.to_string()))?;

        RelayAnswer::from_body(&body)
    }
}
