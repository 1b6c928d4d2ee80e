//! HTTP handlers for the chat endpoint.
//!
//! Every outcome, including malformed input and upstream faults, is answered
//! with a JSON body.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{debug, warn};

use crate::application::handlers::chat::RelayChatHandler;
use crate::domain::relay::RelayError;

use super::dto::parse_chat_request;

/// Shared application state for chat handlers.
#[derive(Clone)]
pub struct ChatAppState {
    pub relay: RelayChatHandler,
}

impl ChatAppState {
    pub fn new(relay: RelayChatHandler) -> Self {
        Self { relay }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_body())).into_response()
    }
}

/// Relay a chat query to the upstream backend.
///
/// POST /api/chat
///
/// A body that cannot be buffered (for instance one over the size limit) is
/// treated like any other unparseable body.
pub async fn relay_chat(
    State(state): State<ChatAppState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            debug!(reason = %rejection, "chat request body could not be read");
            return failure_response(RelayError::MissingQuery);
        }
    };

    let query = match parse_chat_request(&body) {
        Ok(query) => query,
        Err(e) => return failure_response(e),
    };

    match state.relay.handle(query).await {
        Ok(answer) => (StatusCode::OK, Json(answer)).into_response(),
        Err(e) => failure_response(e),
    }
}

/// Logs a failed relay at a level matching its cause and renders it.
fn failure_response(error: RelayError) -> Response {
    if error.is_fault() {
        warn!(status = error.status_code(), error = %error, "chat relay failed");
    } else {
        debug!(error = %error, "rejecting chat request without a usable query");
    }
    error.into_response()
}
