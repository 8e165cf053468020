// src/config.rs
use std::net::SocketAddr;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";
pub const DEFAULT_WEBHOOK_URL: &str =
    "https://n8n-latest-5p8o.onrender.com/webhook/2a14d77f-71f9-4ea7-b742-52eafea637da";
pub const DEFAULT_LOG_FILTER: &str = "chat_relay=info,tower_http=info";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT value {0:?}")]
    InvalidPort(String),

    #[error("invalid FRONTEND_URL value {0:?}")]
    InvalidFrontendUrl(String),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Process configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub frontend_url: String,
    pub webhook_url: String,
    /// Suppresses internal error details in responses.
    pub production: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            frontend_url: DEFAULT_FRONTEND_URL.to_string(),
            webhook_url: DEFAULT_WEBHOOK_URL.to_string(),
            production: false,
        }
    }
}

impl Config {
    /// Load from the process environment, honouring a `.env` file if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT").filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => defaults.port,
        };

        let frontend_url = lookup("FRONTEND_URL")
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.frontend_url);
        let webhook_url = lookup("WEBHOOK_URL")
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.webhook_url);
        // NODE_ENV is what existing deployments set; APP_ENV is an alias.
        let production = ["NODE_ENV", "APP_ENV"]
            .into_iter()
            .filter_map(&lookup)
            .any(|v| v.trim().eq_ignore_ascii_case("production"));

        Ok(Self { port, frontend_url, webhook_url, production })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
