//! Module Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Module entity (top-level navigable feature area)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "icono", default)]
    pub icon: String,
    /// Display order (advisory sort key, duplicates legal)
    #[serde(rename = "orden")]
    pub order: i32,
    #[serde(rename = "activo")]
    pub is_active: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Create module payload
///
/// `nombre` is required but kept optional here so a missing field
/// surfaces as a 400 Validation error instead of a deserialization
/// rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModuleCreate {
    #[serde(rename = "nombre")]
    pub name: Option<String>,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
    #[serde(rename = "icono")]
    pub icon: Option<String>,
    #[serde(rename = "orden")]
    pub order: Option<i32>,
    #[serde(rename = "activo")]
    pub is_active: Option<bool>,
}

/// Update module payload; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModuleUpdate {
    #[serde(rename = "nombre")]
    pub name: Option<String>,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
    #[serde(rename = "icono")]
    pub icon: Option<String>,
    #[serde(rename = "orden")]
    pub order: Option<i32>,
    #[serde(rename = "activo")]
    pub is_active: Option<bool>,
}
