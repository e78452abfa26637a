//! Mock identity authority
//!
//! A stand-in for the external identity provider the admin server can
//! delegate authentication to. Fixed user table, opaque tokens, two
//! endpoints: `POST /api/auth/login` and `GET /api/users/me`.
//!
//! The router is exposed here so integration tests can run the mock
//! in-process.

pub mod api;
pub mod state;

pub use api::router;
pub use state::AppState;
