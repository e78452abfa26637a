//! Opaque session tokens
//!
//! Tokens are random, per-session-unique strings with no embedded
//! claims; the service keeps a token → user id map for the lifetime of
//! the process. No expiry or refresh; token lifecycle is out of scope.

use dashmap::DashMap;
use uuid::Uuid;

/// Session token registry
#[derive(Debug, Default)]
pub struct TokenService {
    sessions: DashMap<String, String>,
}

impl TokenService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a fresh token for a user and register the session
    pub fn mint(&self, user_id: &str) -> String {
        let token = format!("tok_{}", Uuid::new_v4().simple());
        self.sessions.insert(token.clone(), user_id.to_string());
        token
    }

    /// Resolve a token back to the user id it was minted for
    pub fn resolve(&self, token: &str) -> Option<String> {
        self.sessions.get(token).map(|entry| entry.value().clone())
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header value
pub fn extract_bearer(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minted_tokens_are_unique_and_resolve() {
        let service = TokenService::new();
        let t1 = service.mint("user-admin");
        let t2 = service.mint("user-admin");

        assert_ne!(t1, t2);
        assert_eq!(service.resolve(&t1).as_deref(), Some("user-admin"));
        assert_eq!(service.resolve(&t2).as_deref(), Some("user-admin"));
        assert!(service.resolve("tok_unknown").is_none());
    }

    #[test]
    fn bearer_extraction() {
        assert_eq!(extract_bearer("Bearer abc123"), Some("abc123"));
        assert_eq!(extract_bearer("Bearer "), None);
        assert_eq!(extract_bearer("Basic abc123"), None);
    }
}
