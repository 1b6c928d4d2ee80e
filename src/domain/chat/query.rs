//! The text a user submits for diagnosis.

use serde::Serialize;
use thiserror::Error;

/// A non-empty query string, alive for one round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

/// Reasons a query cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("query cannot be empty")]
    Empty,
}

/// Wire shape shared by the relay and the upstream backend.
#[derive(Debug, Clone, Serialize)]
pub struct QueryPayload<'a> {
    pub query: &'a str,
}

impl Query {
    /// Accepts any non-empty string as-is.
    ///
    /// Whitespace is kept; only the conversation side trims input.
    pub fn new(text: impl Into<String>) -> Result<Self, QueryError> {
        let text = text.into();
        if text.is_empty() {
            return Err(QueryError::Empty);
        }
        Ok(Self(text))
    }

    /// Builds a query from typed input, trimming surrounding whitespace.
    pub fn from_user_input(text: &str) -> Result<Self, QueryError> {
        Self::new(text.trim())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn payload(&self) -> QueryPayload<'_> {
        QueryPayload { query: &self.0 }
    }
}
