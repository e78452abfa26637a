//! User Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Role;

/// User entity as stored in the entity store
///
/// `roles` holds role id references; they are resolved to full [`Role`]
/// records at login. Never serialized onto the API; responses use
/// [`UserResponse`], which drops the password.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub person: Person,
    #[serde(rename = "roles")]
    pub role_ids: Vec<String>,
    #[serde(rename = "intentosFallidos")]
    pub failed_attempts: i32,
    #[serde(rename = "activo")]
    pub is_active: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "ultimoAcceso")]
    pub last_access: DateTime<Utc>,
}

/// Person sub-record (profile data attached to a user)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "nombres")]
    pub first_names: String,
    #[serde(rename = "apellidos")]
    pub last_names: String,
    #[serde(rename = "tipoDocumento")]
    pub document_type: String,
    #[serde(rename = "numeroDocumento")]
    pub document_number: String,
    #[serde(rename = "fechaNacimiento")]
    pub birth_date: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "activo")]
    pub is_active: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "nombreCompleto")]
    pub full_name: String,
}

/// User response (without password, roles populated)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    pub person: Person,
    pub roles: Vec<Role>,
    #[serde(rename = "intentosFallidos")]
    pub failed_attempts: i32,
    #[serde(rename = "activo")]
    pub is_active: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "ultimoAcceso")]
    pub last_access: DateTime<Utc>,
}

impl UserResponse {
    /// Build the response form of a user with its roles resolved
    pub fn from_user(user: &User, roles: Vec<Role>) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            person: user.person.clone(),
            roles,
            failed_attempts: user.failed_attempts,
            is_active: user.is_active,
            created_at: user.created_at,
            updated_at: user.updated_at,
            last_access: user.last_access,
        }
    }
}
