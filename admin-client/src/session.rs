//! Session persistence
//!
//! One JSON file under a fixed name keeps {user, permisos, token}
//! across restarts. Absence or a corrupt file is equivalent to
//! "logged out"; loading never fails.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use shared::models::UserResponse;
use shared::permission::Permission;

/// Fixed storage file name
const SESSION_FILE: &str = "auth.json";

/// The persisted login payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub user: UserResponse,
    #[serde(rename = "permisos")]
    pub permissions: Vec<Permission>,
    pub token: String,
}

/// File-backed session storage
#[derive(Debug, Clone)]
pub struct SessionStorage {
    path: PathBuf,
}

impl SessionStorage {
    /// Create session storage under a base directory
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        let path = base_path.into().join(SESSION_FILE);
        Self { path }
    }

    fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Persist the session
    pub fn save(&self, session: &AuthSession) -> std::io::Result<()> {
        self.ensure_dir()?;
        let json = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, json)
    }

    /// Load the stored session; `None` when absent or corrupt
    pub fn load(&self) -> Option<AuthSession> {
        if !self.path.exists() {
            return None;
        }
        let json = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&json).ok()
    }

    /// Check whether a session file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Remove the stored session
    pub fn delete(&self) -> std::io::Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    /// Path of the session file
    pub fn path(&self) -> &Path {
        &self.path
    }
}
