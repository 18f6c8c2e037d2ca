//! Token blacklist repository trait.
//!
//! A persisted set of revoked tokens. Membership is checked against live
//! entries only: an entry whose expiration has passed is logically dead,
//! since the token it guards can no longer pass expiry validation anyway.
//! Saving the same token twice overwrites the entry; logout must tolerate
//! duplicate inserts.

use async_trait::async_trait;

use crate::domain::entities::token::BlacklistEntry;
use crate::errors::DomainError;

/// Repository trait for the token blacklist
#[async_trait]
pub trait BlacklistRepository: Send + Sync {
    /// Insert or overwrite a blacklist entry. Inserting an entry whose
    /// expiration is already past is a no-op.
    async fn save(&self, entry: BlacklistEntry) -> Result<(), DomainError>;

    /// Check whether a token is currently blacklisted.
    async fn contains(&self, token: &str) -> Result<bool, DomainError>;

    /// Remove entries whose expiration has passed.
    ///
    /// Backends with native TTL support expire entries themselves and may
    /// implement this as a no-op returning zero.
    async fn purge_expired(&self) -> Result<usize, DomainError>;
}
