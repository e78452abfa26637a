//! Module Repository

use chrono::Utc;

use shared::models::{Module, ModuleCreate, ModuleUpdate};

use super::{RepoError, RepoResult, Repository, new_entity_id, required_text};
use crate::db::MemoryDb;

#[derive(Clone)]
pub struct ModuleRepository {
    db: MemoryDb,
}

impl ModuleRepository {
    pub fn new(db: MemoryDb) -> Self {
        Self { db }
    }
}

impl Repository<Module, ModuleCreate, ModuleUpdate> for ModuleRepository {
    async fn find_all(&self) -> RepoResult<Vec<Module>> {
        Ok(self.db.modules().read().clone())
    }

    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Module>> {
        Ok(self.db.modules().read().iter().find(|m| m.id == id).cloned())
    }

    async fn create(&self, data: ModuleCreate) -> RepoResult<Module> {
        let name = required_text(data.name, "Module name")?;

        let now = Utc::now();
        let mut modules = self.db.modules().write();
        let module = Module {
            id: new_entity_id(),
            name,
            description: data.description.unwrap_or_default(),
            icon: data.icon.unwrap_or_else(|| "fas fa-cube".to_string()),
            order: data.order.unwrap_or(modules.len() as i32 + 1),
            is_active: data.is_active.unwrap_or(true),
            created_at: now,
            updated_at: now,
        };
        modules.push(module.clone());
        Ok(module)
    }

    async fn update(&self, id: &str, data: ModuleUpdate) -> RepoResult<Module> {
        let mut modules = self.db.modules().write();
        let module = modules
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| RepoError::NotFound(format!("Module {id} not found")))?;

        // Explicit merge: absent fields are a no-op, present values always
        // apply (including false / 0 / empty strings).
        if let Some(name) = data.name {
            module.name = name;
        }
        if let Some(description) = data.description {
            module.description = description;
        }
        if let Some(icon) = data.icon {
            module.icon = icon;
        }
        if let Some(order) = data.order {
            module.order = order;
        }
        if let Some(is_active) = data.is_active {
            module.is_active = is_active;
        }
        module.updated_at = Utc::now();

        Ok(module.clone())
    }

    async fn delete(&self, id: &str) -> RepoResult<bool> {
        let mut modules = self.db.modules().write();
        let before = modules.len();
        modules.retain(|m| m.id != id);
        if modules.len() == before {
            return Err(RepoError::NotFound(format!("Module {id} not found")));
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> ModuleRepository {
        ModuleRepository::new(MemoryDb::new())
    }

    #[tokio::test]
    async fn create_requires_name() {
        let r = repo();
        let err = r.create(ModuleCreate::default()).await.unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));

        // Whitespace-only names are rejected too
        let err = r
            .create(ModuleCreate {
                name: Some("   ".into()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
    }

    #[tokio::test]
    async fn create_applies_defaults() {
        let r = repo();
        let module = r
            .create(ModuleCreate {
                name: Some("Solicitudes".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(module.description, "");
        assert_eq!(module.icon, "fas fa-cube");
        assert_eq!(module.order, 1);
        assert!(module.is_active);

        // Second module defaults to the next position
        let second = r
            .create(ModuleCreate {
                name: Some("Reportes".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(second.order, 2);
    }

    #[tokio::test]
    async fn update_merges_only_present_fields() {
        let r = repo();
        let module = r
            .create(ModuleCreate {
                name: Some("Dashboard".into()),
                description: Some("Panel de control".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        let updated = r
            .update(
                &module.id,
                ModuleUpdate {
                    order: Some(5),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Dashboard");
        assert_eq!(updated.description, "Panel de control");
        assert_eq!(updated.order, 5);
        assert!(updated.is_active);
        assert!(updated.updated_at >= module.updated_at);
    }

    #[tokio::test]
    async fn update_applies_explicit_falsy_values() {
        let r = repo();
        let module = r
            .create(ModuleCreate {
                name: Some("Dashboard".into()),
                order: Some(3),
                ..Default::default()
            })
            .await
            .unwrap();

        let updated = r
            .update(
                &module.id,
                ModuleUpdate {
                    description: Some(String::new()),
                    order: Some(0),
                    is_active: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.description, "");
        assert_eq!(updated.order, 0);
        assert!(!updated.is_active);
    }

    #[tokio::test]
    async fn delete_missing_is_stable_not_found() {
        let r = repo();
        let module = r
            .create(ModuleCreate {
                name: Some("Dashboard".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(r.delete(&module.id).await.unwrap());
        // Deleting twice keeps failing the same way and never corrupts the store
        assert!(matches!(
            r.delete(&module.id).await.unwrap_err(),
            RepoError::NotFound(_)
        ));
        assert!(matches!(
            r.delete(&module.id).await.unwrap_err(),
            RepoError::NotFound(_)
        ));
        assert!(r.find_all().await.unwrap().is_empty());
    }
}
