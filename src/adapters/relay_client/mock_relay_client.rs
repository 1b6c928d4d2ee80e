//! Mock Relay Client for testing the conversation controller.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::chat::Query;
use crate::ports::{RelayAnswer, RelayClient, RelayClientError};

/// Replays queued results and records the queries it was asked.
#[derive(Debug, Clone, Default)]
pub struct MockRelayClient {
    results: Arc<Mutex<VecDeque<Result<RelayAnswer, RelayClientError>>>>,
    queries: Arc<Mutex<Vec<String>>>,
}

impl MockRelayClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful answer.
    pub fn with_answer(self, answer: impl Into<String>) -> Self {
        self.with_result(Ok(RelayAnswer::new(answer)))
    }

    /// Queues a failure.
    pub fn with_error(self, error: RelayClientError) -> Self {
        self.with_result(Err(error))
    }

    pub fn with_result(self, result: Result<RelayAnswer, RelayClientError>) -> Self {
        self.results.lock().unwrap().push_back(result);
        self
    }

    pub fn call_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }

    /// Queries received, in order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl RelayClient for MockRelayClient {
    async fn ask(&self, query: &Query) -> Result<RelayAnswer, RelayClientError> {
        self.queries.lock().unwrap().push(query.as_str().to_string());
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(RelayAnswer::default()))
    }
}
