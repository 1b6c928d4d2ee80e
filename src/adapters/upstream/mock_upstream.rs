//! Mock Upstream Client for testing.
//!
//! Replays queued replies or errors and records every call, so relay tests run
//! without a backend.
//!
//! # Example
//!
//! ```ignore
//! let upstream = MockUpstreamClient::new()
//!     .with_reply(UpstreamReply::text(200, "hello"))
//!     .with_error(UpstreamError::Transport("ECONNREFUSED".into()));
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::chat::Query;
use crate::domain::relay::UpstreamReply;
use crate::ports::{UpstreamClient, UpstreamError};

/// A call observed by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub url: String,
    pub query: String,
}

/// Mock upstream client.
#[derive(Debug, Clone, Default)]
pub struct MockUpstreamClient {
    /// Pre-configured results (consumed in order).
    results: Arc<Mutex<VecDeque<Result<UpstreamReply, UpstreamError>>>>,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockUpstreamClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a reply to the queue.
    pub fn with_reply(self, reply: UpstreamReply) -> Self {
        self.results.lock().unwrap().push_back(Ok(reply));
        self
    }

    /// Adds an error to the queue.
    pub fn with_error(self, error: UpstreamError) -> Self {
        self.results.lock().unwrap().push_back(Err(error));
        self
    }

    /// Returns the number of calls made.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns all recorded calls.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl UpstreamClient for MockUpstreamClient {
    async fn post_query(&self, url: &str, query: &Query) -> Result<UpstreamReply, UpstreamError> {
        self.calls.lock().unwrap().push(RecordedCall {
            url: url.to_string(),
            query: query.as_str().to_string(),
        });

        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(UpstreamReply::text(200, "Mock response")))
    }
}
