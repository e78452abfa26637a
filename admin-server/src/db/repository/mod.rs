//! Repository Module
//!
//! Provides CRUD operations over the in-memory entity store. Handlers
//! never touch the collections directly; everything goes through a
//! repository so the storage backend stays swappable.

pub mod module;
pub mod option;
pub mod role;
pub mod user;

// Re-exports
pub use module::ModuleRepository;
pub use option::MenuOptionRepository;
pub use role::RoleRepository;
pub use user::UserRepository;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Common repository trait for basic CRUD
///
/// Async signatures so a persistent backend can implement the same seam.
#[allow(async_fn_in_trait)]
pub trait Repository<T, CreateDto, UpdateDto> {
    async fn find_all(&self) -> RepoResult<Vec<T>>;
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<T>>;
    async fn create(&self, data: CreateDto) -> RepoResult<T>;
    async fn update(&self, id: &str, data: UpdateDto) -> RepoResult<T>;
    async fn delete(&self, id: &str) -> RepoResult<bool>;
}

/// Generate a new entity identifier
pub(crate) fn new_entity_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Unwrap a required text field, rejecting absent or blank values
pub(crate) fn required_text(value: Option<String>, field: &str) -> RepoResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(RepoError::Validation(format!("{field} is required"))),
    }
}
