//! Mock implementation of RefreshTokenRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

use super::r#trait::RefreshTokenRepository;

/// In-memory refresh token store keyed by user id
#[derive(Default)]
pub struct MockRefreshTokenRepository {
    tokens: Arc<RwLock<HashMap<Uuid, RefreshToken>>>,
    fail: Arc<RwLock<bool>>,
}

impl MockRefreshTokenRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with a storage error
    pub async fn set_failing(&self, failing: bool) {
        *self.fail.write().await = failing;
    }

    async fn check_failure(&self) -> Result<(), DomainError> {
        if *self.fail.read().await {
            return Err(DomainError::Storage {
                message: "mock refresh token repository failure".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl RefreshTokenRepository for MockRefreshTokenRepository {
    async fn save(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        self.check_failure().await?;
        let mut tokens = self.tokens.write().await;
        tokens.insert(token.user_id, token.clone());
        Ok(token)
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<RefreshToken>, DomainError> {
        self.check_failure().await?;
        let tokens = self.tokens.read().await;
        Ok(tokens.get(&user_id).cloned())
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<RefreshToken>, DomainError> {
        self.check_failure().await?;
        let tokens = self.tokens.read().await;
        Ok(tokens.values().find(|t| t.token == token).cloned())
    }

    async fn delete_by_token(&self, token: &str) -> Result<bool, DomainError> {
        self.check_failure().await?;
        let mut tokens = self.tokens.write().await;
        let key = tokens
            .iter()
            .find(|(_, t)| t.token == token)
            .map(|(k, _)| *k);
        match key {
            Some(k) => {
                tokens.remove(&k);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
