//! Role Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role entity (named permission group assigned to users)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "icono", default)]
    pub icon: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "activo")]
    pub is_active: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Create role payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoleCreate {
    #[serde(rename = "nombre")]
    pub name: Option<String>,
    #[serde(rename = "icono")]
    pub icon: Option<String>,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
    #[serde(rename = "activo")]
    pub is_active: Option<bool>,
}

/// Update role payload; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoleUpdate {
    #[serde(rename = "nombre")]
    pub name: Option<String>,
    #[serde(rename = "icono")]
    pub icon: Option<String>,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
    #[serde(rename = "activo")]
    pub is_active: Option<bool>,
}
