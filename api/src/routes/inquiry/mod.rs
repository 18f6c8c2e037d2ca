//! Inquiry board route handlers. Thin CRUD glue over the inquiry service.

use actix_web::{web, HttpResponse};
use validator::Validate;

use ab_core::repositories::{
    BlacklistRepository, InquiryRepository, RefreshTokenRepository, UserRepository,
};
use ab_core::services::crypto::PhoneCipher;
use ab_core::services::password::PasswordVerifier;

use crate::app::AppState;
use crate::dto::inquiry::{
    CreateInquiryRequest, InquiryListResponse, InquiryResponse, UserQuery,
};
use crate::handlers::error::inquiry_error_response;

/// Handler for GET /inquiries?userId=
///
/// Lists the requesting user's inquiries, newest first.
pub async fn list_inquiries<U, R, B, I, C, P>(
    state: web::Data<AppState<U, R, B, I, C, P>>,
    query: web::Query<UserQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RefreshTokenRepository + 'static,
    B: BlacklistRepository + 'static,
    I: InquiryRepository + 'static,
    C: PhoneCipher + 'static,
    P: PasswordVerifier + 'static,
{
    match state.inquiry_service.list(query.user_id).await {
        Ok(inquiries) => HttpResponse::Ok().json(InquiryListResponse {
            inquiries: inquiries.into_iter().map(InquiryResponse::from).collect(),
        }),
        Err(error) => inquiry_error_response(&error),
    }
}

/// Handler for GET /inquiries/{id}?userId=
pub async fn get_inquiry<U, R, B, I, C, P>(
    state: web::Data<AppState<U, R, B, I, C, P>>,
    path: web::Path<u64>,
    query: web::Query<UserQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RefreshTokenRepository + 'static,
    B: BlacklistRepository + 'static,
    I: InquiryRepository + 'static,
    C: PhoneCipher + 'static,
    P: PasswordVerifier + 'static,
{
    match state
        .inquiry_service
        .detail(query.user_id, path.into_inner())
        .await
    {
        Ok(inquiry) => HttpResponse::Ok().json(InquiryResponse::from(inquiry)),
        Err(error) => inquiry_error_response(&error),
    }
}

/// Handler for POST /inquiries
///
/// Creates an inquiry after validating title and content lengths.
pub async fn create_inquiry<U, R, B, I, C, P>(
    state: web::Data<AppState<U, R, B, I, C, P>>,
    request: web::Json<CreateInquiryRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RefreshTokenRepository + 'static,
    B: BlacklistRepository + 'static,
    I: InquiryRepository + 'static,
    C: PhoneCipher + 'static,
    P: PasswordVerifier + 'static,
{
    if let Err(e) = request.validate() {
        return HttpResponse::BadRequest().body(format!("Invalid inquiry: {}", e));
    }

    let request = request.into_inner();
    match state
        .inquiry_service
        .create(request.user_id, request.title, request.content)
        .await
    {
        Ok(inquiry) => HttpResponse::Ok().json(InquiryResponse::from(inquiry)),
        Err(error) => inquiry_error_response(&error),
    }
}
