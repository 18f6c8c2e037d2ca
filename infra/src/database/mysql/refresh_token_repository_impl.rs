//! MySQL implementation of the RefreshTokenRepository trait.
//!
//! The table is keyed by user id, so the one-live-token-per-user invariant
//! is enforced by the schema itself: saving upserts, and the previous token
//! for that user simply ceases to exist. A unique index on the token column
//! backs the reverse lookup used by the refresh and logout flows.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use tracing::debug;
use uuid::Uuid;

use ab_core::domain::entities::token::RefreshToken;
use ab_core::errors::DomainError;
use ab_core::repositories::RefreshTokenRepository;

/// MySQL implementation of RefreshTokenRepository
pub struct MySqlRefreshTokenRepository {
    pool: MySqlPool,
}

impl MySqlRefreshTokenRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_token(row: &sqlx::mysql::MySqlRow) -> Result<RefreshToken, DomainError> {
        let user_id: String = row.try_get("user_id").map_err(storage_err)?;

        Ok(RefreshToken {
            user_id: Uuid::parse_str(&user_id).map_err(|e| DomainError::Storage {
                message: format!("Invalid user UUID: {}", e),
            })?,
            token: row.try_get("token").map_err(storage_err)?,
            issued_at: row
                .try_get::<DateTime<Utc>, _>("issued_at")
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
impl RefreshTokenRepository for MySqlRefreshTokenRepository {
    async fn save(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        let query = r#"
            INSERT INTO refresh_tokens (user_id, token, issued_at)
            VALUES (?, ?, ?)
            ON DUPLICATE KEY UPDATE
                token = VALUES(token),
                issued_at = VALUES(issued_at)
        "#;

        sqlx::query(query)
            .bind(token.user_id.to_string())
            .bind(&token.token)
            .bind(token.issued_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Storage {
                message: format!("Failed to save refresh token: {}", e),
            })?;

        debug!(user_id = %token.user_id, "refresh token saved");
        Ok(token)
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<RefreshToken>, DomainError> {
        let query = r#"
            SELECT user_id, token, issued_at
            FROM refresh_tokens
            WHERE user_id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Storage {
                message: format!("Failed to find refresh token: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_token(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<RefreshToken>, DomainError> {
        let query = r#"
            SELECT user_id, token, issued_at
            FROM refresh_tokens
            WHERE token = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Storage {
                message: format!("Failed to find refresh token by value: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_token(&row)?)),
            None => Ok(None),
        }
    }

    async fn delete_by_token(&self, token: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM refresh_tokens WHERE token = ?")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Storage {
                message: format!("Failed to delete refresh token: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }
}
