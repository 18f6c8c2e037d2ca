//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::r#trait::UserRepository;

/// In-memory user repository keyed by encrypted phone number
#[derive(Default)]
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
    fail: Arc<RwLock<bool>>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a user into the repository
    pub async fn insert(&self, user: User) {
        let mut users = self.users.write().await;
        users.insert(user.phone_enc.clone(), user);
    }

    /// Make every subsequent call fail with a storage error
    pub async fn set_failing(&self, failing: bool) {
        *self.fail.write().await = failing;
    }

    async fn check_failure(&self) -> Result<(), DomainError> {
        if *self.fail.read().await {
            return Err(DomainError::Storage {
                message: "mock user repository failure".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_phone_enc(&self, phone_enc: &str) -> Result<Option<User>, DomainError> {
        self.check_failure().await?;
        let users = self.users.read().await;
        Ok(users.get(phone_enc).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        self.check_failure().await?;
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.id == id).cloned())
    }
}
