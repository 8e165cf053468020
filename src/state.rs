// src/state.rs
use std::sync::Arc;

use crate::config::{Config, ConfigError};
use crate::services::webhook_client::WebhookClient;

pub type SharedState = Arc<AppState>;

/// Read-only per-process state handed to every handler.
pub struct AppState {
    pub config: Config,
    pub webhook: WebhookClient,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let webhook = WebhookClient::new(config.webhook_url.clone())?;
        Ok(Self { config, webhook })
    }
}
