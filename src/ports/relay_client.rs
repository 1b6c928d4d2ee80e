//! Relay Client Port - the conversation side's view of `POST /api/chat`.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::domain::chat::{Query, RoundTripOutcome};

/// Port used by the conversation controller to reach the relay.
#[async_trait]
pub trait RelayClient: Send + Sync {
    /// Sends one query and returns the relay's successful reply.
    async fn ask(&self, query: &Query) -> Result<RelayAnswer, RelayClientError>;
}

/// A successful relay reply.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RelayAnswer {
    /// Text of the `answer` field, when the reply carried one.
    pub answer: Option<String>,
}

impl RelayAnswer {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: Some(answer.into()),
        }
    }

    /// Extracts `answer` from a relay JSON body.
    ///
    /// A bare `null` body is a parse failure. Any other shape is accepted; a
    /// non-string `answer` is rendered as JSON text and `null` counts as absent.
    pub fn from_body(body: &Value) -> Result<Self, RelayClientError> {
        if body.is_null() {
            return Err(RelayClientError::Parse(
                "relay reply was null, expected an object".to_string(),
            ));
        }
        let answer = match body.get("answer") {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => Some(text.clone()),
            Some(other) => Some(other.to_string()),
        };
        Ok(Self { answer })
    }
}

/// Client-side round-trip failures.
///
/// The display text is the description shown in the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayClientError {
    /// The relay answered with a non-success status.
    #[error("API returned {0}")]
    Status(u16),

    /// The relay could not be reached.
    #[error("{0}")]
    Network(String),

    /// The relay's body was not valid JSON.
    #[error("{0}")]
    Parse(String),
}

impl From<Result<RelayAnswer, RelayClientError>> for RoundTripOutcome {
    fn from(result: Result<RelayAnswer, RelayClientError>) -> Self {
        match result {
            Ok(reply) => RoundTripOutcome::Answered(reply.answer),
            Err(e) => RoundTripOutcome::Failed(e.to_string()),
        }
    }
}
