//! Database layer
//!
//! An in-memory entity store standing in for a real database. Flat
//! collections behind `parking_lot::RwLock` keep every mutation
//! single-writer; all access goes through the repository layer so the
//! store can be swapped for a persistent backend without touching the
//! assembler or the auth gateway.

pub mod repository;
pub mod seed;

use std::sync::Arc;

use parking_lot::RwLock;

use shared::models::{MenuOption, Module, Role, User};

/// In-memory database handle
///
/// Cheap to clone; all clones share the same collections.
#[derive(Clone, Default)]
pub struct MemoryDb {
    inner: Arc<Collections>,
}

#[derive(Default)]
struct Collections {
    modules: RwLock<Vec<Module>>,
    options: RwLock<Vec<MenuOption>>,
    roles: RwLock<Vec<Role>>,
    users: RwLock<Vec<User>>,
}

impl MemoryDb {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn modules(&self) -> &RwLock<Vec<Module>> {
        &self.inner.modules
    }

    pub(crate) fn options(&self) -> &RwLock<Vec<MenuOption>> {
        &self.inner.options
    }

    pub(crate) fn roles(&self) -> &RwLock<Vec<Role>> {
        &self.inner.roles
    }

    pub(crate) fn users(&self) -> &RwLock<Vec<User>> {
        &self.inner.users
    }
}
