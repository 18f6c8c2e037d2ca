//! Refresh token repository trait.
//!
//! The store maps user id -> current refresh token, one live token per
//! user. `save` overwrites any prior record for the same user; there is no
//! rotation history. The logout and refresh flows address records by the
//! token value itself, so the store must also support a reverse lookup.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

/// Repository trait for refresh token persistence
#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    /// Save a refresh token record, replacing any existing record for the
    /// same user (last writer wins).
    async fn save(&self, token: RefreshToken) -> Result<RefreshToken, DomainError>;

    /// Find the current refresh token for a user.
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<RefreshToken>, DomainError>;

    /// Reverse lookup: find the record holding the given token value.
    ///
    /// The refresh flow recovers the token's owner this way, since refresh
    /// tokens carry no subject claim.
    async fn find_by_token(&self, token: &str) -> Result<Option<RefreshToken>, DomainError>;

    /// Delete the record holding the given token value.
    ///
    /// # Returns
    /// * `Ok(true)` - a record was deleted
    /// * `Ok(false)` - no record held that token
    async fn delete_by_token(&self, token: &str) -> Result<bool, DomainError>;
}
