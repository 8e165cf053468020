use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::Response,
};
use serde_json::Value;

use crate::{error::AppError, message::ChatRequest, state::SharedState};

/// `POST /api/chat`: validate, forward to the webhook, relay its reply.
pub async fn chat_handler(
    State(state): State<SharedState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Response, AppError> {
    // An unreadable body is treated like an empty one.
    let request = match body {
        Ok(Json(value)) => ChatRequest::from_value(value),
        Err(rejection) => {
            tracing::debug!(%rejection, "unparsable chat body");
            ChatRequest::default()
        }
    };
    let payload = request.into_payload()?;

    state
        .webhook
        .forward(&payload)
        .await
        .into_reply(state.config.production)
}
