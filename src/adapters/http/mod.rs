//! HTTP adapters - REST API implementations.
//!
//! [`app_router`] assembles the relay's router with its tracing and CORS layers.

pub mod chat;
pub mod middleware;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

pub use chat::{chat_router, ChatAppState};

/// Build the complete application router.
pub fn app_router(state: ChatAppState, server: &ServerConfig) -> Router {
    chat_router()
        .layer(middleware::cors_layer(server))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
