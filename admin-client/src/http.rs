//! HTTP client for network-based API calls

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use shared::client::{ApiResponse, LoginData, LoginRequest};

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client for making network requests to the admin server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            token: None,
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {t}"))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'));
        let mut request = self.client.get(&url);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'));
        let mut request = self.client.post(&url).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let message = error_message(&response.text().await?, status);
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized(message)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(message)),
                _ => Err(ClientError::Internal(message)),
            };
        }

        response.json().await.map_err(Into::into)
    }

    // ========== Auth API ==========

    /// Login with an identifier (username or email) and password
    pub async fn login(&self, identifier: &str, password: &str) -> ClientResult<LoginData> {
        let request = LoginRequest {
            username: Some(identifier.to_string()),
            email: None,
            password: Some(password.to_string()),
        };

        self.post::<ApiResponse<LoginData>, _>("/api/auth/login", &request)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing login data".to_string()))
    }
}

/// Pull the `error` field out of an envelope body, falling back to the
/// raw text or the bare status
fn error_message(body: &str, status: StatusCode) -> String {
    serde_json::from_str::<ApiResponse<()>>(body)
        .ok()
        .and_then(|envelope| envelope.error)
        .unwrap_or_else(|| {
            if body.is_empty() {
                format!("HTTP {}", status.as_u16())
            } else {
                body.to_string()
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_the_envelope_field() {
        assert_eq!(
            error_message(
                r#"{"success":false,"error":"Invalid username or password"}"#,
                StatusCode::UNAUTHORIZED
            ),
            "Invalid username or password"
        );
        assert_eq!(error_message("", StatusCode::BAD_GATEWAY), "HTTP 502");
        assert_eq!(error_message("oops", StatusCode::BAD_GATEWAY), "oops");
    }
}
