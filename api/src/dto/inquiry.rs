//! Inquiry board DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use ab_core::domain::entities::inquiry::Inquiry;

/// Query parameter identifying the requesting user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQuery {
    pub user_id: Uuid,
}

/// Body of POST /inquiries
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateInquiryRequest {
    pub user_id: Uuid,
    #[validate(length(min = 1, max = 100))]
    pub title: String,
    #[validate(length(min = 1, max = 3000))]
    pub content: String,
}

/// A single inquiry in API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryResponse {
    pub id: u64,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Inquiry> for InquiryResponse {
    fn from(inquiry: Inquiry) -> Self {
        Self {
            id: inquiry.id,
            user_id: inquiry.user_id,
            title: inquiry.title,
            content: inquiry.content,
            created_at: inquiry.created_at,
            updated_at: inquiry.updated_at,
        }
    }
}

/// Response of GET /inquiries
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryListResponse {
    pub inquiries: Vec<InquiryResponse>,
}
