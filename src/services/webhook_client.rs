// src/services/webhook_client.rs
use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use reqwest::Client;
use serde_json::Value;

use crate::{error::AppError, message::WebhookPayload};

/// What came back from a single webhook call.
#[derive(Debug)]
pub enum RelayOutcome {
    /// The call did not complete, or its body could not be read or parsed.
    Unreachable { status: Option<u16>, detail: String },
    /// Non-2xx reply, relayed as plain text.
    ErrorStatus(StatusCode, String),
    JsonBody(StatusCode, Value),
    TextBody(StatusCode, String),
}

impl RelayOutcome {
    fn unreachable(err: reqwest::Error) -> Self {
        RelayOutcome::Unreachable {
            status: err.status().map(|s| s.as_u16()),
            detail: err.to_string(),
        }
    }

    /// Turn the outcome into the reply for the caller. Only `Unreachable`
    /// becomes a local error; everything else mirrors the webhook.
    pub fn into_reply(self, production: bool) -> Result<Response, AppError> {
        match self {
            RelayOutcome::Unreachable { status, detail } => {
                tracing::error!(?status, %detail, "webhook unreachable");
                Err(AppError::DownstreamUnreachable {
                    status,
                    details: (!production).then_some(detail),
                })
            }
            RelayOutcome::ErrorStatus(status, text) => {
                let text = if text.is_empty() { "Webhook error".to_string() } else { text };
                Ok(plain_text(status, text))
            }
            RelayOutcome::JsonBody(status, value) => Ok((status, Json(value)).into_response()),
            RelayOutcome::TextBody(status, text) => Ok(plain_text(status, text)),
        }
    }
}

fn plain_text(status: StatusCode, text: String) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, HeaderValue::from_static("text/plain; charset=utf-8"))],
        text,
    )
        .into_response()
}

/// Forwards chat payloads to the one configured webhook.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: Client,
    url: String,
}

impl WebhookClient {
    pub fn new(url: impl Into<String>) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder().build()?,
            url: url.into(),
        })
    }

    pub async fn forward(&self, payload: &WebhookPayload) -> RelayOutcome {
        tracing::debug!(url = %self.url, has_session = payload.session_id.is_some(), "forwarding chat message");

        let response = match self.client.post(&self.url).json(payload).send().await {
            Ok(response) => response,
            Err(err) => return RelayOutcome::unreachable(err),
        };

        let status = response.status();
        let is_json = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("application/json"));

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "webhook returned error status");
            return RelayOutcome::ErrorStatus(status, text);
        }

        if is_json {
            match response.json::<Value>().await {
                Ok(value) => RelayOutcome::JsonBody(status, value),
                Err(err) => RelayOutcome::unreachable(err),
            }
        } else {
            match response.text().await {
                Ok(text) => RelayOutcome::TextBody(status, text),
                Err(err) => RelayOutcome::unreachable(err),
            }
        }
    }
}
