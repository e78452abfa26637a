//! Upstream identity authority client
//!
//! HTTP client for the external authority the gateway can delegate
//! authentication to. Every outbound call attaches a bearer token when
//! present and serializes the body as JSON. Failures are never retried;
//! a single failed call fails the whole login attempt.

use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use thiserror::Error;

/// Upstream call error
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The authority answered with a non-success status
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    /// The authority was unreachable (network fault or timeout)
    #[error("identity authority unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Client for the external identity authority
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(base_url: impl Into<String>, timeout_ms: u64) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(timeout_ms))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// POST /api/auth/login on the authority
    pub async fn login(&self, username: &str, password: &str) -> Result<Value, UpstreamError> {
        let body = serde_json::json!({ "username": username, "password": password });
        self.request(Method::POST, "/api/auth/login", None, Some(&body))
            .await
    }

    /// GET /api/users/me on the authority
    pub async fn profile(&self, token: &str) -> Result<Value, UpstreamError> {
        self.request(Method::GET, "/api/users/me", Some(token), None)
            .await
    }

    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        token: Option<&str>,
        body: Option<&Value>,
    ) -> Result<Value, UpstreamError> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), endpoint);

        let mut request = self.client.request(method.clone(), &url);
        if let Some(token) = token {
            request = request.header(reqwest::header::AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        tracing::info!(method = %method, endpoint, "Upstream request");

        let response = request.send().await.inspect_err(|e| {
            tracing::error!(endpoint, error = %e, "Upstream request failed");
        })?;

        let status = response.status();
        tracing::info!(endpoint, status = %status, "Upstream response");

        if !status.is_success() {
            let message = extract_error_message(response.json::<Value>().await.ok(), status);
            tracing::warn!(endpoint, status = %status, message, "Upstream rejected request");
            return Err(UpstreamError::Rejected { status, message });
        }

        Ok(response.json().await?)
    }
}

/// Pull the error message out of a structured error body, synthesizing a
/// generic `HTTP <status>` message when the body is absent or malformed
fn extract_error_message(body: Option<Value>, status: StatusCode) -> String {
    body.as_ref()
        .and_then(|v| v.get("error"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}
