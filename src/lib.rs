//! HTTP relay that forwards chat messages to a single webhook and hands its
//! reply back to the caller, plus two text helpers for model output.

pub mod config;
pub mod error;
pub mod message;
pub mod routes;
pub mod services;
pub mod state;

use std::sync::Arc;

use axum::Router;

use config::{Config, ConfigError};
use state::AppState;

/// Build the complete application for `config`: routes, state and CORS.
pub fn build_app(config: Config) -> Result<Router, ConfigError> {
    let cors = routes::cors_layer(&config.frontend_url)?;
    let state = Arc::new(AppState::new(config)?);

    Ok(routes::create_router().with_state(state).layer(cors))
}
