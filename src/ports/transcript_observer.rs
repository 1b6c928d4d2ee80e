//! Transcript Observer Port - presentation layers subscribe to state changes.

use crate::domain::chat::ConversationState;

/// Receives the conversation state after every transition.
///
/// Called synchronously from the controller; implementations should not block
/// for long.
pub trait TranscriptObserver: Send + Sync {
    fn on_change(&self, state: &ConversationState);
}
