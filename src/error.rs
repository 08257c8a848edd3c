//! API Errors
//!
//! Structured failures returned by the resource client.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status
    #[error("request rejected with status {status}")]
    Rejected { status: u16, body: Value },

    /// A 2xx response whose body was not valid JSON
    #[error("malformed response body: {0}")]
    Decode(String),

    /// The request could not be built
    #[error("invalid request: {0}")]
    Request(String),
}

impl ApiError {
    /// Human-readable message for inline display.
    ///
    /// Prefers the server's `detail` string, then the whole error body as
    /// compact JSON, then `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        let ApiError::Rejected { body, .. } = self else {
            return fallback.to_string();
        };

        if let Some(detail) = body.get("detail").and_then(Value::as_str) {
            if !detail.is_empty() {
                return detail.to_string();
            }
        }

        match body {
            Value::Null => fallback.to_string(),
            Value::String(text) if text.is_empty() => fallback.to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rejected(body: Value) -> ApiError {
        ApiError::Rejected { status: 400, body }
    }

    #[test]
    fn test_detail_wins() {
        let err = rejected(json!({"detail": "Invalid date range"}));
        assert_eq!(err.user_message("Error saving lease renewal"), "Invalid date range");
    }

    #[test]
    fn test_body_serialized_without_detail() {
        let err = rejected(json!({"new_end_date": ["This field is required."], "amount": ["A valid number is required."]}));
        assert_eq!(
            err.user_message("fallback"),
            r#"{"new_end_date":["This field is required."],"amount":["A valid number is required."]}"#
        );
    }

    #[test]
    fn test_empty_detail_falls_through_to_body() {
        let err = rejected(json!({"detail": ""}));
        assert_eq!(err.user_message("fallback"), r#"{"detail":""}"#);
    }

    #[test]
    fn test_fallback_without_body() {
        assert_eq!(rejected(Value::Null).user_message("Error saving receipt voucher"), "Error saving receipt voucher");
        assert_eq!(
            ApiError::Network("connection refused".into()).user_message("Error saving maintenance request"),
            "Error saving maintenance request"
        );
    }

    #[test]
    fn test_plain_text_body() {
        let err = ApiError::Rejected { status: 502, body: Value::String("Bad Gateway".into()) };
        assert_eq!(err.user_message("fallback"), r#""Bad Gateway""#);
    }
}
