//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `chat` - Transcript messages, queries and the conversation state machine
//! - `relay` - Upstream URL rules, upstream bodies and relay failure taxonomy

pub mod chat;
pub mod relay;
