//! Menu Option Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Module, Role};

/// Menu option entity (a single route/page within a module, gated by role)
///
/// Stored form: `module` and `roles` are bare id references. API
/// responses use [`MenuOptionResponse`] with both populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuOption {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "ruta")]
    pub route: String,
    #[serde(rename = "icono", default)]
    pub icon: String,
    #[serde(rename = "orden")]
    pub order: i32,
    /// Owning module reference (exactly one)
    #[serde(rename = "module")]
    pub module_id: String,
    /// Associated role references (zero or more)
    #[serde(rename = "roles", default)]
    pub role_ids: Vec<String>,
    #[serde(rename = "activo")]
    pub is_active: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Create option payload
///
/// `nombre`, `ruta` and `module` are required; they are optional here so
/// missing fields surface as 400 Validation errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuOptionCreate {
    #[serde(rename = "nombre")]
    pub name: Option<String>,
    #[serde(rename = "ruta")]
    pub route: Option<String>,
    #[serde(rename = "icono")]
    pub icon: Option<String>,
    #[serde(rename = "orden")]
    pub order: Option<i32>,
    #[serde(rename = "module")]
    pub module_id: Option<String>,
    #[serde(rename = "roles")]
    pub role_ids: Option<Vec<String>>,
    #[serde(rename = "activo")]
    pub is_active: Option<bool>,
}

/// Update option payload; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuOptionUpdate {
    #[serde(rename = "nombre")]
    pub name: Option<String>,
    #[serde(rename = "ruta")]
    pub route: Option<String>,
    #[serde(rename = "icono")]
    pub icon: Option<String>,
    #[serde(rename = "orden")]
    pub order: Option<i32>,
    #[serde(rename = "module")]
    pub module_id: Option<String>,
    #[serde(rename = "roles")]
    pub role_ids: Option<Vec<String>>,
    #[serde(rename = "activo")]
    pub is_active: Option<bool>,
}

/// Option response with `module` and `roles` populated into sub-objects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuOptionResponse {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "ruta")]
    pub route: String,
    #[serde(rename = "icono", default)]
    pub icon: String,
    #[serde(rename = "orden")]
    pub order: i32,
    /// Owning module; absent when the reference is dangling
    #[serde(rename = "module", skip_serializing_if = "Option::is_none")]
    pub module: Option<Module>,
    #[serde(rename = "roles", default)]
    pub roles: Vec<RoleSummary>,
    #[serde(rename = "activo")]
    pub is_active: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Role projection inside a populated option
///
/// A dangling role reference degrades to a stub carrying only `_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleSummary {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "nombre", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "icono", skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(rename = "descripcion", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "activo", skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl RoleSummary {
    /// Stub for a role id that no longer resolves
    pub fn stub(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            icon: None,
            description: None,
            is_active: None,
        }
    }
}

impl From<&Role> for RoleSummary {
    fn from(role: &Role) -> Self {
        Self {
            id: role.id.clone(),
            name: Some(role.name.clone()),
            icon: Some(role.icon.clone()),
            description: Some(role.description.clone()),
            is_active: Some(role.is_active),
        }
    }
}
