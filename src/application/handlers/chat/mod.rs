//! Chat handlers.
//!
//! The relay side forwards queries upstream; the conversation side keeps the
//! transcript and talks to the relay.

mod conversation_controller;
mod relay_chat;

pub use conversation_controller::ConversationController;
pub use relay_chat::RelayChatHandler;
