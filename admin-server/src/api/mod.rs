//! API route modules
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`auth`] - login and current-user endpoints
//! - [`modules`] - module management
//! - [`options`] - menu option management
//! - [`roles`] - role management

pub mod auth;
pub mod health;
pub mod modules;
pub mod options;
pub mod roles;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
