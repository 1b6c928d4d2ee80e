//! Chat HTTP adapter - `POST /api/chat`, the relay endpoint.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::parse_chat_request;
pub use handlers::{relay_chat, ChatAppState};
pub use routes::chat_router;
