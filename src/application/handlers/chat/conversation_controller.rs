//! Conversation controller.
//!
//! Owns the transcript on the client side and drives one relay round-trip per
//! submission. Observers are notified after every transition so a view can
//! redraw without holding any state of its own.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::chat::{ConversationState, RoundTripOutcome};
use crate::ports::{RelayClient, TranscriptObserver};

/// Client-side conversation controller.
pub struct ConversationController<C>
where
    C: RelayClient,
{
    client: Arc<C>,
    state: ConversationState,
    observers: Vec<Arc<dyn TranscriptObserver>>,
}

impl<C> ConversationController<C>
where
    C: RelayClient + 'static,
{
    /// Creates a controller with an empty transcript.
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            state: ConversationState::new(),
            observers: Vec::new(),
        }
    }

    /// Registers an observer notified after each state change.
    pub fn with_observer(mut self, observer: Arc<dyn TranscriptObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Current state.
    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    /// Submits typed text.
    ///
    /// Blank input is ignored: no message is recorded and no request is sent.
    /// Otherwise the round-trip runs to completion and the reply, or the
    /// failure, is appended to the transcript.
    pub async fn submit(&mut self, text: &str) -> &ConversationState {
        let Some(query) = self.state.begin_submission(text) else {
            return &self.state;
        };
        self.notify();

        debug!(query_len = query.as_str().len(), "sending query to relay");
        let result = self.client.ask(&query).await;
        if let Err(e) = &result {
            warn!(error = %e, "relay round-trip failed");
        }

        self.state.settle(RoundTripOutcome::from(result));
        self.notify();
        &self.state
    }

    /// Empties the transcript and clears the error flag.
    pub fn clear(&mut self) -> &ConversationState {
        self.state.clear();
        self.notify();
        &self.state
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer.on_change(&self.state);
        }
    }
}
