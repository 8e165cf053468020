// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::message::ErrorResponse;

pub const INVALID_MESSAGE: &str = "Invalid request: \"message\" must be a non-empty string.";
pub const WEBHOOK_FAILURE: &str = "Failed to get reply from webhook";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{}", INVALID_MESSAGE)]
    InvalidInput,

    /// The webhook call did not complete or its response could not be read.
    /// `details` is already stripped when running in production mode.
    #[error("{}", WEBHOOK_FAILURE)]
    DownstreamUnreachable {
        status: Option<u16>,
        details: Option<String>,
    },
}

/// Clamp an error status into the 4xx/5xx range, defaulting to 500.
pub fn error_status(status: Option<u16>) -> StatusCode {
    status
        .filter(|code| (400..600).contains(code))
        .and_then(|code| StatusCode::from_u16(code).ok())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::InvalidInput => (
                StatusCode::BAD_REQUEST,
                ErrorResponse { error: INVALID_MESSAGE.to_string(), details: None },
            ),
            AppError::DownstreamUnreachable { status, details } => (
                error_status(status),
                ErrorResponse { error: WEBHOOK_FAILURE.to_string(), details },
            ),
        };

        (status, Json(body)).into_response()
    }
}
