//! Inquiry-board post entity.
//!
//! The board is plain CRUD over the relational store; no domain logic
//! lives here beyond the record shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A post on the inquiry board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inquiry {
    /// Auto-incremented identifier assigned by the store
    pub id: u64,

    /// Author of the inquiry
    pub user_id: Uuid,

    /// Post title
    pub title: String,

    /// Post body
    pub content: String,

    /// Timestamp when the inquiry was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the inquiry was last updated
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a new inquiry; the store assigns id and timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInquiry {
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
}

impl NewInquiry {
    pub fn new(user_id: Uuid, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            user_id,
            title: title.into(),
            content: content.into(),
        }
    }
}
