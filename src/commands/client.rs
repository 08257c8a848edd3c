//! Resource Client
//!
//! GET/POST/PUT against the back-office REST API. Editors only see the
//! `ResourceClient` trait; `HttpClient` is the browser implementation.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde_json::Value;

use crate::config::AppConfig;
use crate::error::ApiError;

#[async_trait(?Send)]
pub trait ResourceClient {
    async fn get(&self, path: &str) -> Result<Value, ApiError>;
    async fn post(&self, path: &str, body: &Value) -> Result<Value, ApiError>;
    async fn put(&self, path: &str, body: &Value) -> Result<Value, ApiError>;
}

/// `fetch`-backed client; paths are appended to the configured base URL
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    auth_token: Option<String>,
}

impl HttpClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            auth_token: config.auth_token.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header("Accept", "application/json");
        match &self.auth_token {
            Some(token) => builder.header("Authorization", &format!("Token {token}")),
            None => builder,
        }
    }

    async fn send_json(&self, builder: RequestBuilder, body: &Value) -> Result<Value, ApiError> {
        let request = self
            .authorize(builder)
            .json(body)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        read_response(response).await
    }
}

#[async_trait(?Send)]
impl ResourceClient for HttpClient {
    async fn get(&self, path: &str) -> Result<Value, ApiError> {
        tracing::debug!(path, "GET");
        let response = self
            .authorize(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_response(response).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        tracing::debug!(path, "POST");
        self.send_json(Request::post(&self.url(path)), body).await
    }

    async fn put(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        tracing::debug!(path, "PUT");
        self.send_json(Request::put(&self.url(path)), body).await
    }
}

async fn read_response(response: Response) -> Result<Value, ApiError> {
    let status = response.status();
    let text = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    interpret_response(status, &text)
}

/// Turn a status code and raw body into a parsed value or an `ApiError`
pub(crate) fn interpret_response(status: u16, text: &str) -> Result<Value, ApiError> {
    let text = text.trim();

    if (200..300).contains(&status) {
        if text.is_empty() {
            return Ok(Value::Null);
        }
        return serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()));
    }

    let body = if text.is_empty() {
        Value::Null
    } else {
        serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
    };
    Err(ApiError::Rejected { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_bodies() {
        assert_eq!(interpret_response(200, r#"{"id": 4}"#), Ok(json!({"id": 4})));
        assert_eq!(interpret_response(204, ""), Ok(Value::Null));
        assert!(matches!(interpret_response(200, "<html>"), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_rejections_keep_body() {
        assert_eq!(
            interpret_response(400, r#"{"detail": "Invalid date range"}"#),
            Err(ApiError::Rejected { status: 400, body: json!({"detail": "Invalid date range"}) })
        );
        assert_eq!(
            interpret_response(500, "Internal Server Error"),
            Err(ApiError::Rejected { status: 500, body: json!("Internal Server Error") })
        );
        assert_eq!(
            interpret_response(404, "  "),
            Err(ApiError::Rejected { status: 404, body: Value::Null })
        );
    }
}
