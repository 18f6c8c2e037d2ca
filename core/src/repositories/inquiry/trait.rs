//! Inquiry repository trait. Plain CRUD over the board table.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::inquiry::{Inquiry, NewInquiry};
use crate::errors::DomainError;

/// Repository trait for inquiry board posts
#[async_trait]
pub trait InquiryRepository: Send + Sync {
    /// List all inquiries authored by a user, newest first.
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Inquiry>, DomainError>;

    /// Find an inquiry by its identifier.
    async fn find_by_id(&self, id: u64) -> Result<Option<Inquiry>, DomainError>;

    /// Insert a new inquiry and return it with the assigned id.
    async fn insert(&self, inquiry: NewInquiry) -> Result<Inquiry, DomainError>;
}
