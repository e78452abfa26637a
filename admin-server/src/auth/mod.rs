//! Authentication support
//!
//! Opaque session tokens for the local auth mode. Token issuance in the
//! delegated mode belongs entirely to the external identity authority.

mod token;

pub use token::{TokenService, extract_bearer};
