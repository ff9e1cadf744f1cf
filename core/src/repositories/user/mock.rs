//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::User;
use crate::errors::{DomainError, EntityError};

use super::trait_::UserRepository;

/// In-memory user repository for testing
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<i64, User>>>,
    next_id: AtomicI64,
}

impl MockUserRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by_key(|u| u.id);
        Ok(all)
    }

    async fn create(&self, mut user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(EntityError::UserAlreadyExists {
                email: user.email.clone(),
            }
            .into());
        }

        user.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if !users.contains_key(&user.id) {
            return Err(EntityError::UserNotFound { id: user.id }.into());
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        Ok(users.remove(&id).is_some())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.email == email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_ids_and_rejects_duplicates() {
        let repo = MockUserRepository::new();
        let alice = repo
            .create(User::new("Alice", "alice@example.com", "hash", "111"))
            .await
            .unwrap();
        assert_eq!(alice.id, 1);

        let err = repo
            .create(User::new("Alice 2", "alice@example.com", "hash", "222"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::Entity(EntityError::UserAlreadyExists { .. })
        ));
    }

    #[tokio::test]
    async fn test_find_by_email() {
        let repo = MockUserRepository::new();
        repo.create(User::new("Bob", "bob@example.com", "hash", "333"))
            .await
            .unwrap();

        assert!(repo.find_by_email("bob@example.com").await.unwrap().is_some());
        assert!(repo.find_by_email("nobody@example.com").await.unwrap().is_none());
        assert!(repo.exists_by_email("bob@example.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = MockUserRepository::new();
        let bob = repo
            .create(User::new("Bob", "bob@example.com", "hash", "333"))
            .await
            .unwrap();

        assert!(repo.delete(bob.id).await.unwrap());
        assert!(!repo.delete(bob.id).await.unwrap());
    }
}
