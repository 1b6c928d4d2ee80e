//! Chat domain module.
//!
//! Transcript messages, the user's query and the conversation state machine
//! the client drives for every submission.

mod conversation;
mod message;
mod query;

pub use conversation::{
    ConversationState, RoundTripOutcome, COLD_START_HINT, NO_RESPONSE_FALLBACK,
};
pub use message::{Message, MessageRole};
pub use query::{Query, QueryError, QueryPayload};
