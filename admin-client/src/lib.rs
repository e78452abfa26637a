//! Admin Client - HTTP client and session cache for the admin panel
//!
//! Makes the login payload (user, token, permission tree) survive
//! restarts without re-authenticating, and exposes it to a consuming UI.

pub mod cache;
pub mod config;
pub mod error;
pub mod http;
pub mod session;

pub use cache::PermissionCache;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use session::{AuthSession, SessionStorage};

// Re-export shared types for convenience
pub use shared::client::{ApiResponse, LoginData};
pub use shared::models::UserResponse;
pub use shared::permission::Permission;
