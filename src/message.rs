// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;

/// Inbound body of `POST /api/chat`.
///
/// Both fields are kept untyped so that a wrongly-typed `message` is reported
/// as invalid input instead of an extractor rejection. `None` means the key
/// was missing; an explicit `null` is `Some(Value::Null)`.
#[derive(Debug, Default)]
pub struct ChatRequest {
    pub message: Option<Value>,
    pub session_id: Option<Value>,
}

/// Body forwarded to the webhook.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookPayload {
    pub message: String,
    #[serde(rename = "sessionId", skip_serializing_if = "Option::is_none")]
    pub session_id: Option<Value>,
}

impl ChatRequest {
    /// Lenient parse: anything that isn't a JSON object is an empty request.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(mut map) => Self {
                message: map.remove("message"),
                session_id: map.remove("sessionId"),
            },
            _ => Self::default(),
        }
    }

    pub fn into_payload(self) -> Result<WebhookPayload, AppError> {
        match self.message {
            Some(Value::String(message)) if !message.trim().is_empty() => Ok(WebhookPayload {
                message,
                session_id: self.session_id,
            }),
            _ => Err(AppError::InvalidInput),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn message_is_forwarded_untrimmed() {
        let payload = ChatRequest::from_value(json!({"message": "  hi  ", "sessionId": "abc"}))
            .into_payload()
            .unwrap();
        assert_eq!(payload.message, "  hi  ");
        assert_eq!(payload.session_id, Some(json!("abc")));
    }

    #[test]
    fn null_session_id_is_forwarded() {
        let payload = ChatRequest::from_value(json!({"message": "hi", "sessionId": null}))
            .into_payload()
            .unwrap();
        assert_eq!(payload.session_id, Some(Value::Null));
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"message": "hi", "sessionId": null})
        );
    }

    #[test]
    fn array_body_is_not_read_positionally() {
        let result = ChatRequest::from_value(json!(["hello", "s-1"])).into_payload();
        assert!(matches!(result, Err(AppError::InvalidInput)));
    }

    #[test]
    fn absent_session_id_is_not_serialized() {
        let payload = ChatRequest::from_value(json!({"message": "hi"}))
            .into_payload()
            .unwrap();
        assert_eq!(serde_json::to_value(&payload).unwrap(), json!({"message": "hi"}));
    }

    #[test]
    fn rejects_non_string_and_blank_messages() {
        for body in [
            json!({}),
            json!({"message": 42}),
            json!({"message": null}),
            json!({"message": ["hi"]}),
            json!({"message": ""}),
            json!({"message": " \n\t "}),
            json!("hi"),
            json!([1, 2]),
        ] {
            let result = ChatRequest::from_value(body.clone()).into_payload();
            assert!(matches!(result, Err(AppError::InvalidInput)), "accepted {body}");
        }
    }
}
