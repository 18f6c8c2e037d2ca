//! Inquiry board service. Thin request/response glue over the inquiry
//! store; the only rule enforced here is that the requesting user exists.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::inquiry::{Inquiry, NewInquiry};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{InquiryRepository, UserRepository};

pub struct InquiryService<I, U>
where
    I: InquiryRepository,
    U: UserRepository,
{
    inquiry_repository: Arc<I>,
    user_repository: Arc<U>,
}

impl<I, U> InquiryService<I, U>
where
    I: InquiryRepository,
    U: UserRepository,
{
    pub fn new(inquiry_repository: Arc<I>, user_repository: Arc<U>) -> Self {
        Self {
            inquiry_repository,
            user_repository,
        }
    }

    /// List a user's inquiries, newest first.
    pub async fn list(&self, user_id: Uuid) -> DomainResult<Vec<Inquiry>> {
        self.require_user(user_id).await?;
        self.inquiry_repository.list_by_user(user_id).await
    }

    /// Fetch a single inquiry.
    pub async fn detail(&self, user_id: Uuid, inquiry_id: u64) -> DomainResult<Inquiry> {
        self.require_user(user_id).await?;
        self.inquiry_repository
            .find_by_id(inquiry_id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: format!("inquiry {}", inquiry_id),
            })
    }

    /// Create a new inquiry authored by the user.
    pub async fn create(
        &self,
        user_id: Uuid,
        title: String,
        content: String,
    ) -> DomainResult<Inquiry> {
        self.require_user(user_id).await?;
        self.inquiry_repository
            .insert(NewInquiry::new(user_id, title, content))
            .await
    }

    async fn require_user(&self, user_id: Uuid) -> DomainResult<()> {
        if self.user_repository.exists(user_id).await? {
            Ok(())
        } else {
            Err(DomainError::Auth(AuthError::UserNotFound))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::user::User;
    use crate::repositories::{MockInquiryRepository, MockUserRepository};

    async fn service_with_user() -> (
        InquiryService<MockInquiryRepository, MockUserRepository>,
        Uuid,
    ) {
        let inquiries = Arc::new(MockInquiryRepository::new());
        let users = Arc::new(MockUserRepository::new());

        let user = User::new("enc".to_string(), "hash".to_string());
        let user_id = user.id;
        users.insert(user).await;

        (InquiryService::new(inquiries, users), user_id)
    }

    #[tokio::test]
    async fn test_create_then_list_and_detail() {
        let (service, user_id) = service_with_user().await;

        let created = service
            .create(user_id, "title".to_string(), "content".to_string())
            .await
            .unwrap();

        let listed = service.list(user_id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0], created);

        let detail = service.detail(user_id, created.id).await.unwrap();
        assert_eq!(detail.content, "content");
    }

    #[tokio::test]
    async fn test_unknown_user_is_rejected() {
        let (service, _) = service_with_user().await;

        let err = service.list(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err, DomainError::Auth(AuthError::UserNotFound));
    }

    #[tokio::test]
    async fn test_missing_inquiry_is_not_found() {
        let (service, user_id) = service_with_user().await;

        let err = service.detail(user_id, 404).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
