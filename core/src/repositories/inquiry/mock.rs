//! Mock implementation of InquiryRepository for testing

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::inquiry::{Inquiry, NewInquiry};
use crate::errors::DomainError;

use super::r#trait::InquiryRepository;

/// In-memory inquiry store with auto-incremented ids
#[derive(Default)]
pub struct MockInquiryRepository {
    inquiries: Arc<RwLock<BTreeMap<u64, Inquiry>>>,
}

impl MockInquiryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InquiryRepository for MockInquiryRepository {
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Inquiry>, DomainError> {
        let inquiries = self.inquiries.read().await;
        let mut posts: Vec<Inquiry> = inquiries
            .values()
            .filter(|i| i.user_id == user_id)
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(posts)
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<Inquiry>, DomainError> {
        let inquiries = self.inquiries.read().await;
        Ok(inquiries.get(&id).cloned())
    }

    async fn insert(&self, inquiry: NewInquiry) -> Result<Inquiry, DomainError> {
        let mut inquiries = self.inquiries.write().await;
        let id = inquiries.keys().next_back().copied().unwrap_or(0) + 1;
        let now = Utc::now();
        let record = Inquiry {
            id,
            user_id: inquiry.user_id,
            title: inquiry.title,
            content: inquiry.content,
            created_at: now,
            updated_at: now,
        };
        inquiries.insert(id, record.clone());
        Ok(record)
    }
}
