//! Mock implementation of BlacklistRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::token::BlacklistEntry;
use crate::errors::DomainError;

use super::r#trait::BlacklistRepository;

/// In-memory blacklist keyed by token string
#[derive(Default)]
pub struct MockBlacklistRepository {
    entries: Arc<RwLock<HashMap<String, BlacklistEntry>>>,
    fail: Arc<RwLock<bool>>,
}

impl MockBlacklistRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with a storage error
    pub async fn set_failing(&self, failing: bool) {
        *self.fail.write().await = failing;
    }

    /// Number of stored entries, dead or alive
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    async fn check_failure(&self) -> Result<(), DomainError> {
        if *self.fail.read().await {
            return Err(DomainError::Storage {
                message: "mock blacklist repository failure".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl BlacklistRepository for MockBlacklistRepository {
    async fn save(&self, entry: BlacklistEntry) -> Result<(), DomainError> {
        self.check_failure().await?;
        if entry.is_expired() {
            return Ok(());
        }
        let mut entries = self.entries.write().await;
        entries.insert(entry.token.clone(), entry);
        Ok(())
    }

    async fn contains(&self, token: &str) -> Result<bool, DomainError> {
        self.check_failure().await?;
        let entries = self.entries.read().await;
        Ok(entries.get(token).map(|e| !e.is_expired()).unwrap_or(false))
    }

    async fn purge_expired(&self) -> Result<usize, DomainError> {
        self.check_failure().await?;
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, e| !e.is_expired());
        Ok(before - entries.len())
    }
}
