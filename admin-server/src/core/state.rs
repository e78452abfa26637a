//! Server state

use std::sync::Arc;

use crate::auth::TokenService;
use crate::core::Config;
use crate::db::repository::{
    MenuOptionRepository, ModuleRepository, RoleRepository, UserRepository,
};
use crate::db::{MemoryDb, seed};
use crate::upstream::UpstreamClient;

/// Shared application state
///
/// Holds the configuration, the entity store, the session-token service
/// and the upstream identity-authority client. Cheap to clone; all
/// clones share the same underlying services.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// In-memory entity store
    pub db: MemoryDb,
    /// Opaque session tokens (local auth mode)
    pub tokens: Arc<TokenService>,
    /// External identity authority client (delegated auth mode)
    pub upstream: UpstreamClient,
}

impl ServerState {
    /// Build the state and seed the demo data set
    pub fn initialize(config: &Config) -> Self {
        let db = MemoryDb::new();
        seed::seed(&db);

        let upstream =
            UpstreamClient::new(config.upstream_auth_url.clone(), config.request_timeout_ms);

        Self {
            config: config.clone(),
            db,
            tokens: Arc::new(TokenService::new()),
            upstream,
        }
    }

    pub fn modules(&self) -> ModuleRepository {
        ModuleRepository::new(self.db.clone())
    }

    pub fn options(&self) -> MenuOptionRepository {
        MenuOptionRepository::new(self.db.clone())
    }

    pub fn roles(&self) -> RoleRepository {
        RoleRepository::new(self.db.clone())
    }

    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.db.clone())
    }
}
