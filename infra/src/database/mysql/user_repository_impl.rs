//! MySQL implementation of the UserRepository trait.
//!
//! Users are looked up by the deterministic ciphertext of their phone
//! number, which carries a unique index. Soft-deleted rows are returned
//! as-is; treating them as absent is the auth service's decision, not the
//! store's.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use ab_core::domain::entities::user::User;
use ab_core::errors::DomainError;
use ab_core::repositories::UserRepository;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row.try_get("id").map_err(storage_err)?;

        Ok(User {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Storage {
                message: format!("Invalid user UUID: {}", e),
            })?,
            phone_enc: row.try_get("phone_enc").map_err(storage_err)?,
            password_hash: row.try_get("password_hash").map_err(storage_err)?,
            is_deleted: row.try_get("is_deleted").map_err(storage_err)?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(storage_err)?,
        })
    }
}

fn storage_err(e: sqlx::Error) -> DomainError {
    DomainError::Storage {
        message: e.to_string(),
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_phone_enc(&self, phone_enc: &str) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, phone_enc, password_hash, is_deleted, created_at
            FROM users
            WHERE phone_enc = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(phone_enc)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Storage {
                message: format!("Failed to find user by phone: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, phone_enc, password_hash, is_deleted, created_at
            FROM users
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Storage {
                message: format!("Failed to find user by id: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }
}
