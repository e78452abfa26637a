//! Unified error handling
//!
//! Application-level error type shared by every handler. Each variant
//! maps to one HTTP status; the response body is always the uniform
//! [`ApiResponse`] envelope with `success: false`.
//!
//! | Variant | Status |
//! |---------|--------|
//! | Validation | 400 |
//! | Authentication | 401 |
//! | NotFound | 404 |
//! | Upstream | 502 |
//! | Internal | 500 |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use shared::ApiResponse;

use crate::db::repository::RepoError;

/// Application error enumeration
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or malformed required field (400)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Bad credentials or rejected delegation (401)
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Referenced entity absent (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Identity authority unreachable or returned a malformed body (502)
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Unexpected fault (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn authentication(msg: impl Into<String>) -> Self {
        Self::Authentication(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Authentication(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Upstream(msg) => {
                error!(target: "upstream", error = %msg, "Upstream failure");
                (StatusCode::BAD_GATEWAY, msg.clone())
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };

        (status, Json(ApiResponse::<()>::error(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repo_errors_map_onto_app_errors() {
        let err: AppError = RepoError::NotFound("Module m1 not found".into()).into();
        assert!(matches!(err, AppError::NotFound(_)));

        let err: AppError = RepoError::Validation("Module name is required".into()).into();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
