//! User Repository
//!
//! Users have no HTTP CRUD surface; the auth gateway is the only
//! consumer. Lookup is by username or email, and the repository tracks
//! the failed-login counter and last-access timestamp.

use chrono::Utc;

use shared::models::User;

use super::{RepoError, RepoResult};
use crate::db::MemoryDb;

#[derive(Clone)]
pub struct UserRepository {
    db: MemoryDb,
}

impl UserRepository {
    pub fn new(db: MemoryDb) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<User>> {
        Ok(self.db.users().read().iter().find(|u| u.id == id).cloned())
    }

    /// Look up a user by username or email
    pub async fn find_by_identifier(&self, identifier: &str) -> RepoResult<Option<User>> {
        Ok(self
            .db
            .users()
            .read()
            .iter()
            .find(|u| u.username == identifier || u.email == identifier)
            .cloned())
    }

    /// Reset the failed-login counter and stamp the last access time.
    /// Returns the refreshed record.
    pub async fn record_login_success(&self, id: &str) -> RepoResult<User> {
        let mut users = self.db.users().write();
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| RepoError::NotFound(format!("User {id} not found")))?;
        user.failed_attempts = 0;
        user.last_access = Utc::now();
        Ok(user.clone())
    }

    /// Increment the failed-login counter
    pub async fn record_login_failure(&self, id: &str) -> RepoResult<()> {
        let mut users = self.db.users().write();
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| RepoError::NotFound(format!("User {id} not found")))?;
        user.failed_attempts += 1;
        Ok(())
    }

    pub(crate) async fn insert(&self, user: User) {
        self.db.users().write().push(user);
    }
}

#[cfg(test)]
mod tests {
    use shared::models::Person;

    use super::*;

    fn sample_user() -> User {
        let now = Utc::now();
        User {
            id: "u1".into(),
            username: "admin".into(),
            email: "admin@example.com".into(),
            password: "admin123".into(),
            person: Person {
                id: "p1".into(),
                first_names: "Juan".into(),
                last_names: "García".into(),
                document_type: "DNI".into(),
                document_number: "12345678".into(),
                birth_date: "1990-01-01".into(),
                phone: "123456789".into(),
                address: "Calle 1".into(),
                is_active: true,
                created_at: now,
                updated_at: now,
                full_name: "Juan García".into(),
            },
            role_ids: vec!["r1".into()],
            failed_attempts: 0,
            is_active: true,
            created_at: now,
            updated_at: now,
            last_access: now,
        }
    }

    #[tokio::test]
    async fn lookup_matches_username_and_email() {
        let r = UserRepository::new(MemoryDb::new());
        r.insert(sample_user()).await;

        assert!(r.find_by_identifier("admin").await.unwrap().is_some());
        assert!(
            r.find_by_identifier("admin@example.com")
                .await
                .unwrap()
                .is_some()
        );
        assert!(r.find_by_identifier("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn login_outcomes_update_counters() {
        let r = UserRepository::new(MemoryDb::new());
        r.insert(sample_user()).await;

        r.record_login_failure("u1").await.unwrap();
        r.record_login_failure("u1").await.unwrap();
        assert_eq!(
            r.find_by_id("u1").await.unwrap().unwrap().failed_attempts,
            2
        );

        let refreshed = r.record_login_success("u1").await.unwrap();
        assert_eq!(refreshed.failed_attempts, 0);
    }
}
