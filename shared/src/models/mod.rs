//! Data models
//!
//! Shared between admin-server and admin-client (via API).
//! Struct fields use English names; the wire format keeps the Spanish
//! field names and Mongo-style `_id` keys of the upstream API contract,
//! mapped with `#[serde(rename)]`. All IDs are `String`.

pub mod module;
pub mod option;
pub mod role;
pub mod user;

// Re-exports
pub use module::*;
pub use option::*;
pub use role::*;
pub use user::*;
