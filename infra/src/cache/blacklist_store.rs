//! Redis-backed token blacklist.
//!
//! Entries are written with a TTL equal to the remaining lifetime of the
//! blacklisted token, so Redis drops them exactly when the token would
//! stop validating anyway. Keys are the SHA-256 of the token string:
//! JWTs are long and there is no need to hold raw tokens at rest.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use tracing::debug;

use ab_core::domain::entities::token::BlacklistEntry;
use ab_core::errors::DomainError;
use ab_core::repositories::BlacklistRepository;

use super::redis_client::RedisClient;

/// Key namespace for blacklist entries
const KEY_NAMESPACE: &str = "auth:blacklist";

/// Redis implementation of BlacklistRepository
pub struct RedisBlacklistRepository {
    client: RedisClient,
}

impl RedisBlacklistRepository {
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    fn key_for(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        format!("{}:{:x}", KEY_NAMESPACE, hasher.finalize())
    }
}

fn storage_err(e: redis::RedisError) -> DomainError {
    DomainError::Storage {
        message: format!("Blacklist store failure: {}", e),
    }
}

#[async_trait]
impl BlacklistRepository for RedisBlacklistRepository {
    async fn save(&self, entry: BlacklistEntry) -> Result<(), DomainError> {
        let ttl = entry.time_to_live().num_seconds();
        if ttl <= 0 {
            // The token can no longer pass expiry validation; nothing to do
            debug!("skipping blacklist entry for an already-expired token");
            return Ok(());
        }

        self.client
            .set_with_expiry(&Self::key_for(&entry.token), "1", ttl as u64)
            .await
            .map_err(storage_err)
    }

    async fn contains(&self, token: &str) -> Result<bool, DomainError> {
        self.client
            .exists(&Self::key_for(token))
            .await
            .map_err(storage_err)
    }

    async fn purge_expired(&self) -> Result<usize, DomainError> {
        // Redis evicts entries itself when their TTL lapses
        Ok(0)
    }
}
