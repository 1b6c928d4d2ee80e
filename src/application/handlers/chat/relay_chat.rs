//! RelayChat handler.
//!
//! Forwards one query to the upstream backend and normalizes the outcome.
//! Stateless: the backend configuration is fixed at construction and the
//! handler is shared by every request.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error, warn};

use crate::config::BackendConfig;
use crate::domain::chat::Query;
use crate::domain::relay::RelayError;
use crate::ports::UpstreamClient;

/// Handler for relayed chat queries.
#[derive(Clone)]
pub struct RelayChatHandler {
    backend: Arc<BackendConfig>,
    upstream: Arc<dyn UpstreamClient>,
}

impl RelayChatHandler {
    /// Creates a new handler with the given dependencies.
    pub fn new(backend: Arc<BackendConfig>, upstream: Arc<dyn UpstreamClient>) -> Self {
        Self { backend, upstream }
    }

    /// Relays a query.
    ///
    /// Returns the JSON body for a 200 response, or the [`RelayError`] that
    /// describes the failure. Nothing is retried.
    pub async fn handle(&self, query: Query) -> Result<Value, RelayError> {
        let Some(url) = self.backend.chat_url() else {
            error!("backend URL is not configured; rejecting chat query");
            return Err(RelayError::BackendNotConfigured);
        };

        debug!(%url, query_len = query.as_str().len(), "forwarding chat query upstream");

        let reply = self
            .upstream
            .post_query(&url, &query)
            .await
            .map_err(|e| {
                warn!(%url, error = %e, "upstream request failed");
                RelayError::Proxy(e.to_string())
            })?;

        let status = reply.status;
        let result = reply.into_relay_result();
        match &result {
            Ok(_) => debug!(status, "upstream answered"),
            Err(_) => warn!(status, "upstream reported a failure"),
        }
        result
    }
}
