//! Mock authority state

use dashmap::DashMap;
use uuid::Uuid;

/// A fixed user record
#[derive(Debug, Clone)]
pub struct MockUser {
    pub username: String,
    pub password: String,
    pub full_name: String,
}

/// Shared state: fixed user table plus the tokens issued this run
#[derive(Debug, Default)]
pub struct AppState {
    users: Vec<MockUser>,
    tokens: DashMap<String, String>,
}

impl AppState {
    /// State with the default demo user table
    pub fn new() -> Self {
        Self {
            users: vec![
                MockUser {
                    username: "admin".into(),
                    password: "admin123".into(),
                    full_name: "Juan García".into(),
                },
                MockUser {
                    username: "tesorero".into(),
                    password: "tesorero123".into(),
                    full_name: "María López".into(),
                },
            ],
            tokens: DashMap::new(),
        }
    }

    /// Validate credentials; on success issue and remember a token
    pub fn authenticate(&self, username: &str, password: &str) -> Option<String> {
        self.users
            .iter()
            .find(|u| u.username == username && u.password == password)?;
        let token = format!("ext_{}", Uuid::new_v4().simple());
        self.tokens.insert(token.clone(), username.to_string());
        Some(token)
    }

    /// Resolve a previously issued token to its user
    pub fn user_for_token(&self, token: &str) -> Option<MockUser> {
        let username = self.tokens.get(token)?.value().clone();
        self.users.iter().find(|u| u.username == username).cloned()
    }
}
