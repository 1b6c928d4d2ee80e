//! prolog-assist relay server - entry point.
//!
//! Startup order:
//! 1. Load configuration from the environment (and `.env`).
//! 2. Initialise structured tracing (JSON in production, pretty in dev).
//! 3. Build the upstream client and the relay handler.
//! 4. Serve the Axum router until Ctrl-C or SIGTERM.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use prolog_assist::adapters::http::{app_router, ChatAppState};
use prolog_assist::adapters::upstream::ReqwestUpstreamClient;
use prolog_assist::application::RelayChatHandler;
use prolog_assist::config::{AppConfig, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── 1. Configuration ───────────────────────────────────────────────────────
    let config = AppConfig::load()?;
    config.validate_relay()?;

    // ── 2. Tracing ─────────────────────────────────────────────────────────────
    init_tracing(&config.server);
    info!(version = env!("CARGO_PKG_VERSION"), "prolog-assist relay starting");

    match config.backend.chat_url() {
        Some(url) => info!(upstream = %url, "relaying chat queries"),
        None => warn!("no backend URL configured; every chat query will fail with 500"),
    }

    // ── 3. Relay ───────────────────────────────────────────────────────────────
    let upstream = ReqwestUpstreamClient::new(&config.backend)?;
    let relay = RelayChatHandler::new(Arc::new(config.backend.clone()), Arc::new(upstream));
    let app = app_router(ChatAppState::new(relay), &config.server);

    // ── 4. HTTP server with graceful shutdown ──────────────────────────────────
    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("prolog-assist relay stopped");
    Ok(())
}

/// `RUST_LOG` wins over the configured filter; an invalid filter falls back to `info`.
fn init_tracing(server: &ServerConfig) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        server.log_level.parse::<EnvFilter>().unwrap_or_else(|e| {
            eprintln!(
                "WARN: log level '{}' is not a valid tracing filter ({}); falling back to 'info'",
                server.log_level, e
            );
            EnvFilter::new("info")
        })
    });

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true);

    if server.is_production() {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

/// Returns a future that resolves when SIGINT (Ctrl-C) or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to install CTRL+C signal handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => warn!(error = %e, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("shutdown signal received; starting graceful shutdown");
}
