//! Axum router configuration for the chat endpoint.

use axum::{routing::post, Router};

use super::handlers::{relay_chat, ChatAppState};

/// Create the chat API router.
///
/// # Routes
///
/// - `POST /api/chat` - Relay a query to the upstream backend
pub fn chat_router() -> Router<ChatAppState> {
    Router::new().route("/api/chat", post(relay_chat))
}
