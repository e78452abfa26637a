//! Role Repository

use chrono::Utc;

use shared::models::{Role, RoleCreate, RoleUpdate};

use super::{RepoError, RepoResult, Repository, new_entity_id, required_text};
use crate::db::MemoryDb;

#[derive(Clone)]
pub struct RoleRepository {
    db: MemoryDb,
}

impl RoleRepository {
    pub fn new(db: MemoryDb) -> Self {
        Self { db }
    }

    /// Resolve a set of role ids to full records, preserving input order.
    /// Ids that no longer resolve are skipped.
    pub async fn find_by_ids(&self, ids: &[String]) -> RepoResult<Vec<Role>> {
        let roles = self.db.roles().read();
        Ok(ids
            .iter()
            .filter_map(|id| roles.iter().find(|r| &r.id == id).cloned())
            .collect())
    }
}

impl Repository<Role, RoleCreate, RoleUpdate> for RoleRepository {
    async fn find_all(&self) -> RepoResult<Vec<Role>> {
        Ok(self.db.roles().read().clone())
    }

    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Role>> {
        Ok(self.db.roles().read().iter().find(|r| r.id == id).cloned())
    }

    async fn create(&self, data: RoleCreate) -> RepoResult<Role> {
        let name = required_text(data.name, "Role name")?;

        let now = Utc::now();
        let role = Role {
            id: new_entity_id(),
            name,
            icon: data.icon.unwrap_or_else(|| "fas fa-user".to_string()),
            description: data.description.unwrap_or_default(),
            is_active: data.is_active.unwrap_or(true),
            created_at: now,
            updated_at: now,
        };
        self.db.roles().write().push(role.clone());
        Ok(role)
    }

    async fn update(&self, id: &str, data: RoleUpdate) -> RepoResult<Role> {
        let mut roles = self.db.roles().write();
        let role = roles
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| RepoError::NotFound(format!("Role {id} not found")))?;

        if let Some(name) = data.name {
            role.name = name;
        }
        if let Some(icon) = data.icon {
            role.icon = icon;
        }
        if let Some(description) = data.description {
            role.description = description;
        }
        if let Some(is_active) = data.is_active {
            role.is_active = is_active;
        }
        role.updated_at = Utc::now();

        Ok(role.clone())
    }

    async fn delete(&self, id: &str) -> RepoResult<bool> {
        // No cascade: options keep referencing the deleted role id
        let mut roles = self.db.roles().write();
        let before = roles.len();
        roles.retain(|r| r.id != id);
        if roles.len() == before {
            return Err(RepoError::NotFound(format!("Role {id} not found")));
        }
        Ok(true)
    }
}
