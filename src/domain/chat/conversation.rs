//! Conversation state and its transitions.
//!
//! The transcript is append-only between clears. A submission is split in two
//! transitions, [`ConversationState::begin_submission`] and
//! [`ConversationState::settle`], with the network round-trip in between.
//! Nothing prevents a second submission while busy, and a round-trip that
//! settles after [`ConversationState::clear`] still appends its reply.

use super::message::Message;
use super::query::Query;

/// Assistant text used when the relay answers without an `answer` field.
pub const NO_RESPONSE_FALLBACK: &str = "No response received";

/// Hint appended to every failure shown in the transcript.
pub const COLD_START_HINT: &str =
    "The API may be waking up (takes 30-60 seconds on first request).";

/// How a round-trip ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundTripOutcome {
    /// The relay replied successfully; `None` when it carried no answer text.
    Answered(Option<String>),
    /// The round-trip failed with the given description.
    Failed(String),
}

/// Transcript plus the error and busy flags driving the view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationState {
    messages: Vec<Message>,
    error: Option<String>,
    busy: bool,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages in display order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Description of the last failure, if not cleared since.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Starts a submission.
    ///
    /// Returns `None` and leaves the state untouched when the trimmed text is
    /// empty. Otherwise records the user message, clears the error flag, marks
    /// the conversation busy and returns the query to send.
    pub fn begin_submission(&mut self, text: &str) -> Option<Query> {
        let query = Query::from_user_input(text).ok()?;
        self.messages.push(Message::user(query.as_str()));
        self.error = None;
        self.busy = true;
        Some(query)
    }

    /// Records the end of a round-trip. Always clears the busy flag.
    pub fn settle(&mut self, outcome: RoundTripOutcome) {
        match outcome {
            RoundTripOutcome::Answered(answer) => {
                let content = answer
                    .filter(|text| !text.is_empty())
                    .unwrap_or_else(|| NO_RESPONSE_FALLBACK.to_string());
                self.messages.push(Message::assistant(content));
            }
            RoundTripOutcome::Failed(description) => {
                self.messages
                    .push(Message::error(format!("Error: {}. {}", description, COLD_START_HINT)));
                self.error = Some(description);
            }
        }
        self.busy = false;
    }

    /// Empties the transcript and clears the error flag.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.error = None;
    }
}
