//! Permission tree types
//!
//! The derived, per-login structure mapping a user's roles to the
//! modules/options they may access. It is a view assembled on every
//! login, never persisted as a first-class entity.

use serde::{Deserialize, Serialize};

use crate::models::{MenuOption, Module, Role};

/// One top-level permission entry per role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    #[serde(rename = "rol")]
    pub role: PermissionRole,
    #[serde(rename = "modulos")]
    pub modules: Vec<ModuleGrant>,
}

/// Role projection inside the permission tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PermissionRole {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "icono", default)]
    pub icon: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
}

/// One module with the options visible through a single role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleGrant {
    pub module: PermissionModule,
    #[serde(rename = "opciones")]
    pub options: Vec<PermissionOption>,
}

/// Module projection inside the permission tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PermissionModule {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "orden")]
    pub order: i32,
}

/// Option projection inside the permission tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PermissionOption {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "ruta")]
    pub route: String,
    #[serde(rename = "orden")]
    pub order: i32,
}

impl From<&Role> for PermissionRole {
    fn from(role: &Role) -> Self {
        Self {
            id: role.id.clone(),
            name: role.name.clone(),
            icon: role.icon.clone(),
            description: role.description.clone(),
        }
    }
}

impl From<&Module> for PermissionModule {
    fn from(module: &Module) -> Self {
        Self {
            id: module.id.clone(),
            name: module.name.clone(),
            description: module.description.clone(),
            order: module.order,
        }
    }
}

impl From<&MenuOption> for PermissionOption {
    fn from(option: &MenuOption) -> Self {
        Self {
            id: option.id.clone(),
            name: option.name.clone(),
            route: option.route.clone(),
            order: option.order,
        }
    }
}
