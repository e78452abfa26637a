//! Admin Server - RBAC administration backend
//!
//! # Module structure
//!
//! ```text
//! admin-server/src/
//! ├── core/          # configuration, state, server
//! ├── api/           # HTTP routes and handlers
//! ├── auth/          # opaque session tokens
//! ├── permissions/   # permission tree assembly
//! ├── upstream/      # external identity authority client
//! ├── db/            # in-memory entity store + repositories
//! └── utils/         # errors, logging
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod permissions;
pub mod upstream;
pub mod utils;

// Re-export common types
pub use auth::TokenService;
pub use core::{AuthMode, Config, Server, ServerState, build_router};
pub use db::MemoryDb;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
