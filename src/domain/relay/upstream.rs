//! What the upstream backend sent back, and where to reach it.

use serde_json::{json, Value};

use super::error::RelayError;

/// Path of the chat operation on the upstream backend.
pub const CHAT_PATH: &str = "/chat";

/// Builds the upstream chat URL from a base URL.
///
/// Every trailing `/` is stripped before the path is appended, so
/// `https://host/api///` becomes `https://host/api/chat`.
pub fn upstream_chat_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), CHAT_PATH)
}

/// True when a `Content-Type` header value declares JSON.
pub fn is_json_content_type(content_type: &str) -> bool {
    content_type.to_ascii_lowercase().contains("application/json")
}

/// Upstream body, decoded according to its declared content type.
#[derive(Debug, Clone, PartialEq)]
pub enum UpstreamBody {
    Json(Value),
    Text(String),
}

impl UpstreamBody {
    /// The body as a JSON value; text becomes a JSON string.
    pub fn into_value(self) -> Value {
        match self {
            UpstreamBody::Json(value) => value,
            UpstreamBody::Text(text) => Value::String(text),
        }
    }
}

/// A complete upstream response.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: UpstreamBody,
}

impl UpstreamReply {
    pub fn new(status: u16, body: UpstreamBody) -> Self {
        Self { status, body }
    }

    pub fn json(status: u16, body: Value) -> Self {
        Self::new(status, UpstreamBody::Json(body))
    }

    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self::new(status, UpstreamBody::Text(body.into()))
    }

    /// 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Normalizes the reply into what the relay sends its caller.
    ///
    /// Successful JSON is forwarded untouched and successful text is wrapped
    /// as `{ "answer": text }`. Any other status becomes
    /// [`RelayError::Upstream`], which always reaches the client as a 502.
    pub fn into_relay_result(self) -> Result<Value, RelayError> {
        if !self.is_success() {
            return Err(RelayError::Upstream {
                status: self.status,
                body: self.body.into_value(),
            });
        }

        match self.body {
            UpstreamBody::Json(value) => Ok(value),
            UpstreamBody::Text(text) => Ok(json!({ "answer": text })),
        }
    }
}
