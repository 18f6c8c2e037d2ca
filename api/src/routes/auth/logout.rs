//! Logout endpoint

use actix_web::{web, HttpResponse};

use ab_core::repositories::{
    BlacklistRepository, InquiryRepository, RefreshTokenRepository, UserRepository,
};
use ab_core::services::crypto::PhoneCipher;
use ab_core::services::password::PasswordVerifier;

use crate::app::AppState;
use crate::dto::auth::LogoutQuery;
use crate::handlers::error::{logout_error_response, LOGOUT_SUCCESS};

/// Handler for GET /auth/logout
///
/// Blacklists the presented access and refresh tokens until their natural
/// expiry and deletes the stored refresh record.
///
/// # Query Parameters
/// - `accessToken`: the current access token
/// - `refreshToken`: the current refresh token
///
/// # Response
/// - 200 OK: success text
/// - 400 Bad Request: either token failed signature/expiry validation;
///   no side effects were performed
/// - 500 Internal Server Error: a store write failed; the body carries
///   the failure detail
pub async fn logout<U, R, B, I, C, P>(
    state: web::Data<AppState<U, R, B, I, C, P>>,
    query: web::Query<LogoutQuery>,
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
        .auth_service
        .logout(&query.access_token, &query.refresh_token)
        .await
    {
        Ok(()) => HttpResponse::Ok().body(LOGOUT_SUCCESS),
        Err(error) => logout_error_response(&error),
    }
}
