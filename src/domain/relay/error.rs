//! Failure taxonomy of the relay.

use serde_json::{json, Value};
use thiserror::Error;

/// Every way a relayed query can fail.
///
/// Each variant knows the status code and JSON body reported to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RelayError {
    /// Body unparseable, or `query` missing, not a string, or empty.
    #[error("Missing 'query' field")]
    MissingQuery,

    /// No backend URL in the configuration.
    #[error("Backend URL not configured")]
    BackendNotConfigured,

    /// The upstream could not be reached or its body could not be read.
    #[error("Server proxy error: {0}")]
    Proxy(String),

    /// The upstream answered with a non-success status.
    #[error("Upstream returned status {status}")]
    Upstream { status: u16, body: Value },
}

impl RelayError {
    /// HTTP status reported to the caller.
    ///
    /// Upstream failures are always 502, whatever the upstream's own status.
    pub fn status_code(&self) -> u16 {
        match self {
            RelayError::MissingQuery => 400,
            RelayError::BackendNotConfigured | RelayError::Proxy(_) => 500,
            RelayError::Upstream { .. } => 502,
        }
    }

    /// JSON body reported to the caller.
    pub fn to_body(&self) -> Value {
        match self {
            RelayError::Upstream { status, body } => json!({ "error": body, "status": status }),
            other => json!({ "error": other.to_string() }),
        }
    }

    /// True for failures caused by the deployment or the upstream rather than
    /// the caller's input.
    pub fn is_fault(&self) -> bool {
        !matches!(self, RelayError::MissingQuery)
    }
}
