//! Upstream client backed by `reqwest`.
//!
//! One shared `Client` (and its connection pool) serves every relayed request.
//! No timeout is set unless the backend configuration asks for one.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::Value;

use crate::config::BackendConfig;
use crate::domain::chat::Query;
use crate::domain::relay::{is_json_content_type, UpstreamBody, UpstreamReply};
use crate::ports::{UpstreamClient, UpstreamError};

/// HTTP implementation of [`UpstreamClient`].
#[derive(Debug, Clone)]
pub struct ReqwestUpstreamClient {
    client: Client,
}

impl ReqwestUpstreamClient {
    /// Builds a client honouring the configured timeout, if any.
    pub fn new(config: &BackendConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl UpstreamClient for ReqwestUpstreamClient {
    async fn post_query(&self, url: &str, query: &Query) -> Result<UpstreamReply, UpstreamError> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(&query.payload())
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let declares_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(is_json_content_type);

        let body = if declares_json {
            let value = response
                .json::<Value>()
                .await
                .map_err(|e| UpstreamError::Decode(e.to_string()))?;
            UpstreamBody::Json(value)
        } else {
            let text = response
                .text()
                .await
                .map_err(|e| UpstreamError::Decode(e.to_string()))?;
            UpstreamBody::Text(text)
        };

        Ok(UpstreamReply::new(status, body))
    }
}
