//! Client permission cache
//!
//! Holds the current session in memory, restores it from storage at
//! construction and keeps storage and memory in sync through login and
//! logout. Consumers read user/token/permissions on every render and
//! treat the permission tree as read-only; the only invalidation points
//! are login and logout.

use parking_lot::RwLock;

use shared::models::UserResponse;
use shared::permission::Permission;

use crate::http::HttpClient;
use crate::session::{AuthSession, SessionStorage};
use crate::{ClientConfig, ClientResult};

/// Reactive session/permission cache
pub struct PermissionCache {
    http: HttpClient,
    storage: SessionStorage,
    session: RwLock<Option<AuthSession>>,
}

impl PermissionCache {
    /// Build the cache and restore any stored session.
    /// A corrupt or absent session file degrades to "logged out".
    pub fn new(config: &ClientConfig) -> Self {
        let storage = SessionStorage::new(&config.storage_dir);
        let restored = storage.load();
        if restored.is_some() {
            tracing::info!("Restored session from storage");
        }

        Self {
            http: HttpClient::new(config),
            storage,
            session: RwLock::new(restored),
        }
    }

    /// Current user, when logged in
    pub fn user(&self) -> Option<UserResponse> {
        self.session.read().as_ref().map(|s| s.user.clone())
    }

    /// Current permission tree, when logged in
    pub fn permissions(&self) -> Option<Vec<Permission>> {
        self.session.read().as_ref().map(|s| s.permissions.clone())
    }

    /// Current session token, when logged in
    pub fn token(&self) -> Option<String> {
        self.session.read().as_ref().map(|s| s.token.clone())
    }

    /// True iff a user is present
    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_some()
    }

    /// Log in through the auth gateway, persist the payload and return
    /// the permission tree
    pub async fn login(
        &self,
        identifier: &str,
        password: &str,
    ) -> ClientResult<Vec<Permission>> {
        let data = self.http.login(identifier, password).await?;

        let session = AuthSession {
            user: data.user,
            permissions: data.permissions.clone(),
            token: data.token,
        };

        if let Err(e) = self.storage.save(&session) {
            // The in-memory session still works for this run
            tracing::warn!(error = %e, "Failed to persist session");
        }
        *self.session.write() = Some(session);

        tracing::info!(identifier, "Login successful");
        Ok(data.permissions)
    }

    /// Clear storage and in-memory state unconditionally
    pub fn logout(&self) {
        if let Err(e) = self.storage.delete() {
            tracing::warn!(error = %e, "Failed to delete stored session");
        }
        *self.session.write() = None;
        tracing::info!("Logged out");
    }
}
