// src/routes/mod.rs
pub mod chat;
pub mod health;

use crate::config::ConfigError;
use crate::state::SharedState;
use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use chat::chat_handler;
use health::health_handler;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    let api_routes = Router::new()
        .route("/chat", post(chat_handler))
        .route("/health", get(health_handler));

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
}

/// Only the configured frontend may call the API cross-origin.
pub fn cors_layer(frontend_url: &str) -> Result<CorsLayer, ConfigError> {
    let origin = HeaderValue::from_str(frontend_url)
        .map_err(|_| ConfigError::InvalidFrontendUrl(frontend_url.to_string()))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any))
}
