//! Client-related types shared between server and client
//!
//! Common request/response types used in API communication.

use serde::{Deserialize, Serialize};

use crate::models::UserResponse;
use crate::permission::Permission;

// Re-export ApiResponse from response module
pub use crate::response::ApiResponse;

/// Login request
///
/// The identifier may arrive as `username` or `email`; both fields stay
/// optional so missing credentials produce a 400 instead of a
/// deserialization rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl LoginRequest {
    /// Login identifier: `username` wins over `email` when both are set
    pub fn identifier(&self) -> Option<&str> {
        self.username
            .as_deref()
            .or(self.email.as_deref())
            .filter(|s| !s.trim().is_empty())
    }
}

/// Successful login payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginData {
    pub token: String,
    pub user: UserResponse,
    #[serde(rename = "permisos")]
    pub permissions: Vec<Permission>,
}
