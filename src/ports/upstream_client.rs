//! Upstream Client Port - the HTTP call from the relay to the assistant backend.
//!
//! Implementations perform exactly one POST per call and never retry. Any
//! response that arrives, whatever its status, is returned as an
//! [`UpstreamReply`]; only failures to obtain or decode a response are errors.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::chat::Query;
use crate::domain::relay::UpstreamReply;

/// Port for forwarding a query to the upstream backend.
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// POST `{ "query": ... }` as JSON to `url`.
    ///
    /// The reply body is decoded as JSON when the response declares a JSON
    /// content type, and read as text otherwise.
    async fn post_query(&self, url: &str, query: &Query) -> Result<UpstreamReply, UpstreamError>;
}

/// Failures that prevent the relay from getting a usable upstream reply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamError {
    /// Connection refused, DNS failure, timeout and similar.
    #[error("{0}")]
    Transport(String),

    /// A body was received but could not be read or decoded.
    #[error("{0}")]
    Decode(String),
}
