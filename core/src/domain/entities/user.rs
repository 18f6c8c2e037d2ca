//! User entity representing a registered account.
//!
//! Users are created by the registration flow, which lives outside this
//! service. The auth flows read users and never mutate them; the only
//! account state they consult is the soft-delete flag.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user.
///
/// `phone_enc` holds the deterministic ciphertext of the phone number and
/// doubles as the unique lookup key: the login flow encrypts the presented
/// number with the same key and matches it against this column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned at creation and immutable
    pub id: Uuid,

    /// Encrypted phone number (unique lookup key)
    pub phone_enc: String,

    /// Bcrypt hash of the user's password
    pub password_hash: String,

    /// Soft-delete flag; a deleted row persists but is treated as absent
    pub is_deleted: bool,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user record. Registration lives elsewhere; this is
    /// primarily a seam for tests and fixtures.
    pub fn new(phone_enc: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            phone_enc,
            password_hash,
            is_deleted: false,
            created_at: Utc::now(),
        }
    }

    /// Marks the user as soft-deleted.
    pub fn mark_deleted(&mut self) {
        self.is_deleted = true;
    }
}
