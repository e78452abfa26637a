//! Shared types for the admin panel
//!
//! Wire-level data models, the response envelope and auth DTOs used by
//! both the server and the client crates.

pub mod client;
pub mod models;
pub mod permission;
pub mod response;

// Re-exports
pub use permission::{ModuleGrant, Permission};
pub use response::ApiResponse;
pub use serde::{Deserialize, Serialize};
