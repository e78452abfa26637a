//! Menu Option Repository
//!
//! The only repository with referential checks: an option's module must
//! exist and every role id in its role set must resolve. Checks run
//! before anything is written, so a failed create/update never leaves a
//! partial record behind.

use chrono::Utc;

use shared::models::{MenuOption, MenuOptionCreate, MenuOptionUpdate};

use super::{RepoError, RepoResult, Repository, new_entity_id, required_text};
use crate::db::MemoryDb;

#[derive(Clone)]
pub struct MenuOptionRepository {
    db: MemoryDb,
}

impl MenuOptionRepository {
    pub fn new(db: MemoryDb) -> Self {
        Self { db }
    }

    fn check_module_exists(&self, module_id: &str) -> RepoResult<()> {
        if !self.db.modules().read().iter().any(|m| m.id == module_id) {
            return Err(RepoError::NotFound(format!("Module {module_id} not found")));
        }
        Ok(())
    }

    fn check_roles_exist(&self, role_ids: &[String]) -> RepoResult<()> {
        let roles = self.db.roles().read();
        for role_id in role_ids {
            if !roles.iter().any(|r| &r.id == role_id) {
                return Err(RepoError::NotFound(format!("Role {role_id} not found")));
            }
        }
        Ok(())
    }
}

impl Repository<MenuOption, MenuOptionCreate, MenuOptionUpdate> for MenuOptionRepository {
    async fn find_all(&self) -> RepoResult<Vec<MenuOption>> {
        Ok(self.db.options().read().clone())
    }

    async fn find_by_id(&self, id: &str) -> RepoResult<Option<MenuOption>> {
        Ok(self.db.options().read().iter().find(|o| o.id == id).cloned())
    }

    async fn create(&self, data: MenuOptionCreate) -> RepoResult<MenuOption> {
        let name = required_text(data.name, "Option name")?;
        let route = required_text(data.route, "Route")?;
        let module_id = required_text(data.module_id, "Module")?;
        let role_ids = data.role_ids.unwrap_or_default();

        self.check_module_exists(&module_id)?;
        self.check_roles_exist(&role_ids)?;

        let now = Utc::now();
        let option = MenuOption {
            id: new_entity_id(),
            name,
            route,
            icon: data.icon.unwrap_or_else(|| "fas fa-circle".to_string()),
            order: data.order.unwrap_or(1),
            module_id,
            role_ids,
            is_active: data.is_active.unwrap_or(true),
            created_at: now,
            updated_at: now,
        };
        self.db.options().write().push(option.clone());
        Ok(option)
    }

    async fn update(&self, id: &str, data: MenuOptionUpdate) -> RepoResult<MenuOption> {
        // Referential checks before taking the write lock; nothing is
        // persisted when a reference fails to resolve.
        if let Some(ref module_id) = data.module_id {
            self.check_module_exists(module_id)?;
        }
        if let Some(ref role_ids) = data.role_ids {
            self.check_roles_exist(role_ids)?;
        }

        let mut options = self.db.options().write();
        let option = options
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| RepoError::NotFound(format!("Option {id} not found")))?;

        if let Some(name) = data.name {
            option.name = name;
        }
        if let Some(route) = data.route {
            option.route = route;
        }
        if let Some(icon) = data.icon {
            option.icon = icon;
        }
        if let Some(order) = data.order {
            option.order = order;
        }
        if let Some(module_id) = data.module_id {
            option.module_id = module_id;
        }
        if let Some(role_ids) = data.role_ids {
            option.role_ids = role_ids;
        }
        if let Some(is_active) = data.is_active {
            option.is_active = is_active;
        }
        option.updated_at = Utc::now();

        Ok(option.clone())
    }

    async fn delete(&self, id: &str) -> RepoResult<bool> {
        let mut options = self.db.options().write();
        let before = options.len();
        options.retain(|o| o.id != id);
        if options.len() == before {
            return Err(RepoError::NotFound(format!("Option {id} not found")));
        }
        Ok(true)
    }
}
