//! User repository trait defining the interface for user lookups.
//!
//! Auth flows only ever read users: registration and profile management
//! live outside this service. Lookup is by the encrypted phone number,
//! which is deterministic ciphertext and therefore usable as a key.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User lookups
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by the encrypted form of their phone number.
    ///
    /// # Returns
    /// * `Ok(Some(User))` - user found (may still be soft-deleted)
    /// * `Ok(None)` - no user with that lookup key
    /// * `Err(DomainError)` - storage error
    async fn find_by_phone_enc(&self, phone_enc: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique identifier.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Check that a non-deleted user exists.
    async fn exists(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self
            .find_by_id(id)
            .await?
            .map(|u| !u.is_deleted)
            .unwrap_or(false))
    }
}
