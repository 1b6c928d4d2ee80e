//! Integration tests for the relay over real HTTP.
//!
//! A small Axum app stands in for the assistant backend. The relay runs with
//! the production `reqwest` upstream client, and the conversation controller
//! talks to it with the production relay client:
//! 1. Upstream outcomes are normalized onto the relay's JSON contract
//! 2. Transport failures surface as proxy errors
//! 3. The controller records answers and failures in its transcript

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use http::{header, HeaderMap, StatusCode};
use serde_json::{json, Value};

use prolog_assist::adapters::http::{app_router, ChatAppState};
use prolog_assist::adapters::relay_client::ReqwestRelayClient;
use prolog_assist::adapters::upstream::ReqwestUpstreamClient;
use prolog_assist::application::{ConversationController, RelayChatHandler};
use prolog_assist::config::{BackendConfig, ServerConfig};
use prolog_assist::domain::chat::{MessageRole, COLD_START_HINT};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// What the fake backend saw on its last request.
#[derive(Debug, Clone, Default)]
struct Seen {
    content_type: Option<String>,
    body: Option<Value>,
}

async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Fake assistant backend; the query text selects the reply.
async fn spawn_backend() -> (SocketAddr, Arc<Mutex<Seen>>) {
    let seen = Arc::new(Mutex::new(Seen::default()));
    let recorder = seen.clone();

    let app = Router::new().route(
        "/api/chat",
        post(move |headers: HeaderMap, Json(body): Json<Value>| {
            let recorder = recorder.clone();
            async move {
                *recorder.lock().unwrap() = Seen {
                    content_type: headers
                        .get(header::CONTENT_TYPE)
                        .and_then(|v| v.to_str().ok())
                        .map(String::from),
                    body: Some(body.clone()),
                };
                backend_reply(body["query"].as_str().unwrap_or_default())
            }
        }),
    );

    (spawn(app).await, seen)
}

fn backend_reply(query: &str) -> Response {
    match query {
        "json" => (StatusCode::OK, Json(json!({ "answer": "x" }))).into_response(),
        "text" => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain")],
            "hello",
        )
            .into_response(),
        "missing" => (StatusCode::NOT_FOUND, Json(json!({ "msg": "not found" }))).into_response(),
        "cold" => (
            StatusCode::SERVICE_UNAVAILABLE,
            [(header::CONTENT_TYPE, "text/plain")],
            "warming up",
        )
            .into_response(),
        "broken" => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            "{not json",
        )
            .into_response(),
        other => (StatusCode::OK, Json(json!({ "answer": format!("echo: {}", other) })))
            .into_response(),
    }
}

async fn spawn_relay(backend: BackendConfig) -> SocketAddr {
    let upstream = ReqwestUpstreamClient::new(&backend).unwrap();
    let relay = RelayChatHandler::new(Arc::new(backend), Arc::new(upstream));
    spawn(app_router(ChatAppState::new(relay), &ServerConfig::default())).await
}

async fn post_chat(relay: SocketAddr, body: Value) -> (StatusCode, Value) {
    let response = reqwest::Client::new()
        .post(format!("http://{}/api/chat", relay))
        .json(&body)
        .send()
        .await
        .unwrap();
    let status = StatusCode::from_u16(response.status().as_u16()).unwrap();
    (status, response.json().await.unwrap())
}

/// An address nothing listens on.
async fn closed_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

// =============================================================================
// Relay Endpoint
// =============================================================================

#[tokio::test]
async fn forwards_query_to_normalized_upstream_url() {
    let (backend, seen) = spawn_backend().await;
    let relay = spawn_relay(BackendConfig::with_url(format!("http://{}/api///", backend))).await;

    let (status, body) = post_chat(relay, json!({ "query": "json" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "answer": "x" }));

    let seen = seen.lock().unwrap().clone();
    assert_eq!(seen.body, Some(json!({ "query": "json" })));
    assert!(seen
        .content_type
        .is_some_and(|ct| ct.starts_with("application/json")));
}

#[tokio::test]
async fn plain_text_answer_is_wrapped() {
    let (backend, _) = spawn_backend().await;
    let relay = spawn_relay(BackendConfig::with_url(format!("http://{}/api", backend))).await;

    let (status, body) = post_chat(relay, json!({ "query": "text" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "answer": "hello" }));
}

#[tokio::test]
async fn upstream_json_failure_is_502_with_original_status() {
    let (backend, _) = spawn_backend().await;
    let relay = spawn_relay(BackendConfig::with_url(format!("http://{}/api", backend))).await;

    let (status, body) = post_chat(relay, json!({ "query": "missing" })).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body, json!({ "error": { "msg": "not found" }, "status": 404 }));
}

#[tokio::test]
async fn upstream_text_failure_is_502_with_text_body() {
    let (backend, _) = spawn_backend().await;
    let relay = spawn_relay(BackendConfig::with_url(format!("http://{}/api", backend))).await;

    let (status, body) = post_chat(relay, json!({ "query": "cold" })).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body, json!({ "error": "warming up", "status": 503 }));
}

#[tokio::test]
async fn undecodable_json_is_a_proxy_error() {
    let (backend, _) = spawn_backend().await;
    let relay = spawn_relay(BackendConfig::with_url(format!("http://{}/api", backend))).await;

    let (status, body) = post_chat(relay, json!({ "query": "broken" })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"]
        .as_str()
        .is_some_and(|e| e.starts_with("Server proxy error: ")));
}

#[tokio::test]
async fn unreachable_upstream_is_a_proxy_error() {
    let relay = spawn_relay(BackendConfig::with_url(format!("http://{}", closed_addr().await))).await;

    let (status, body) = post_chat(relay, json!({ "query": "anything" })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"]
        .as_str()
        .is_some_and(|e| e.starts_with("Server proxy error: ")));
}

#[tokio::test]
async fn missing_backend_is_500_for_any_query() {
    let relay = spawn_relay(BackendConfig::default()).await;

    for query in ["json", "  ", "a much longer description of an error"] {
        let (status, body) = post_chat(relay, json!({ "query": query })).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Backend URL not configured" }));
    }
}

#[tokio::test]
async fn invalid_queries_are_400() {
    let relay = spawn_relay(BackendConfig::with_url("http://127.0.0.1:9")).await;

    for body in [json!({}), json!({ "query": "" }), json!({ "query": 7 }), json!({ "query": ["a"] })] {
        let (status, reply) = post_chat(relay, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(reply, json!({ "error": "Missing 'query' field" }));
    }
}

// =============================================================================
// Conversation Controller over HTTP
// =============================================================================

#[tokio::test]
async fn controller_records_answer_from_relay() {
    let (backend, _) = spawn_backend().await;
    let relay = spawn_relay(BackendConfig::with_url(format!("http://{}/api/", backend))).await;
    let client = Arc::new(ReqwestRelayClient::with_endpoint(format!("http://{}/api/chat", relay)));
    let mut controller = ConversationController::new(client);

    let state = controller.submit("  text  ").await;

    let roles: Vec<_> = state.messages().iter().map(|m| m.role).collect();
    assert_eq!(roles, vec![MessageRole::User, MessageRole::Assistant]);
    assert_eq!(state.messages()[0].content, "text");
    assert_eq!(state.messages()[1].content, "hello");
    assert!(!state.is_busy());
}

#[tokio::test]
async fn controller_records_relay_failure() {
    let (backend, _) = spawn_backend().await;
    let relay = spawn_relay(BackendConfig::with_url(format!("http://{}/api", backend))).await;
    let client = Arc::new(ReqwestRelayClient::with_endpoint(format!("http://{}/api/chat", relay)));
    let mut controller = ConversationController::new(client);

    let state = controller.submit("missing").await;

    let roles: Vec<_> = state.messages().iter().map(|m| m.role).collect();
    assert_eq!(roles, vec![MessageRole::User, MessageRole::Error]);
    assert_eq!(state.error(), Some("API returned 502"));
    assert_eq!(
        state.messages()[1].content,
        format!("Error: API returned 502. {}", COLD_START_HINT)
    );
}

#[tokio::test]
async fn controller_reports_unparseable_relay_body() {
    let not_json = Router::new().route(
        "/api/chat",
        post(|| async { (StatusCode::OK, "definitely not json") }),
    );
    let relay = spawn(not_json).await;
    let client = Arc::new(ReqwestRelayClient::with_endpoint(format!("http://{}/api/chat", relay)));
    let mut controller = ConversationController::new(client);

    let state = controller.submit("hello").await;

    assert_eq!(state.messages()[1].role, MessageRole::Error);
    assert!(state.error().is_some());
}

#[tokio::test]
async fn controller_reports_null_relay_body() {
    let null_body = Router::new().route(
        "/api/chat",
        post(|| async { Json(Value::Null) }),
    );
    let relay = spawn(null_body).await;
    let client = Arc::new(ReqwestRelayClient::with_endpoint(format!("http://{}/api/chat", relay)));
    let mut controller = ConversationController::new(client);

    let state = controller.submit("hello").await;

    assert_eq!(state.messages()[1].role, MessageRole::Error);
    assert!(state.error().is_some());
}

#[tokio::test]
async fn controller_reports_unreachable_relay() {
    let client = Arc::new(ReqwestRelayClient::with_endpoint(format!(
        "http://{}/api/chat",
        closed_addr().await
    )));
    let mut controller = ConversationController::new(client);

    let state = controller.submit("hello").await;

    assert_eq!(state.messages().len(), 2);
    assert_eq!(state.messages()[1].role, MessageRole::Error);
    assert!(state.messages()[1].content.ends_with(COLD_START_HINT));
}
