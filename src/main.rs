use anyhow::Context;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use chat_relay::build_app;
use chat_relay::config::{Config, DEFAULT_LOG_FILTER};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("loading configuration")?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = config.listen_addr();
    tracing::info!(
        port = config.port,
        frontend = %config.frontend_url,
        webhook = %config.webhook_url,
        production = config.production,
        "starting chat relay"
    );

    let app = build_app(config)?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    tracing::info!("chat relay running at http://localhost:{}", addr.port());
    axum::serve(listener, app).await?;
    Ok(())
}
