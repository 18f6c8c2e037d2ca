//! MySQL implementation of the InquiryRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use ab_core::domain::entities::inquiry::{Inquiry, NewInquiry};
use ab_core::errors::DomainError;
use ab_core::repositories::InquiryRepository;

/// MySQL implementation of InquiryRepository
pub struct MySqlInquiryRepository {
    pool: MySqlPool,
}

impl MySqlInquiryRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_inquiry(row: &sqlx::mysql::MySqlRow) -> Result<Inquiry, DomainError> {
        let user_id: String = row.try_get("user_id").map_err(storage_err)?;

        Ok(Inquiry {
            id: row.try_get("id").map_err(storage_err)?,
            user_id: Uuid::parse_str(&user_id).map_err(|e| DomainError::Storage {
                message: format!("Invalid user UUID: {}", e),
            })?,
            title: row.try_get("title").map_err(storage_err)?,
            content: row.try_get("content").map_err(storage_err)?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(storage_err)?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
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
impl InquiryRepository for MySqlInquiryRepository {
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Inquiry>, DomainError> {
        let query = r#"
            SELECT id, user_id, title, content, created_at, updated_at
            FROM inquiries
            WHERE user_id = ?
            ORDER BY created_at DESC, id DESC
        "#;

        let rows = sqlx::query(query)
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Storage {
                message: format!("Failed to list inquiries: {}", e),
            })?;

        rows.iter().map(Self::row_to_inquiry).collect()
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<Inquiry>, DomainError> {
        let query = r#"
            SELECT id, user_id, title, content, created_at, updated_at
            FROM inquiries
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Storage {
                message: format!("Failed to find inquiry: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_inquiry(&row)?)),
            None => Ok(None),
        }
    }

    async fn insert(&self, inquiry: NewInquiry) -> Result<Inquiry, DomainError> {
        let now = Utc::now();
        let query = r#"
            INSERT INTO inquiries (user_id, title, content, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(inquiry.user_id.to_string())
            .bind(&inquiry.title)
            .bind(&inquiry.content)
            .bind(now)
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Storage {
                message: format!("Failed to insert inquiry: {}", e),
            })?;

        Ok(Inquiry {
            id: result.last_insert_id(),
            user_id: inquiry.user_id,
            title: inquiry.title,
            content: inquiry.content,
            created_at: now,
            updated_at: now,
        })
    }
}
