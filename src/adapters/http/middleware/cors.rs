//! CORS layer built from the server configuration.

use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ServerConfig;

/// Restricts origins to `server.cors_origins` when set, otherwise allows any.
pub fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let layer = CorsLayer::new().allow_headers(Any).allow_methods(Any);
    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(origins)
    }
}
