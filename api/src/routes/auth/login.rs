//! Login endpoint

use actix_web::{web, HttpResponse};

use ab_core::repositories::{
    BlacklistRepository, InquiryRepository, RefreshTokenRepository, UserRepository,
};
use ab_core::services::crypto::PhoneCipher;
use ab_core::services::password::PasswordVerifier;

use crate::app::AppState;
use crate::dto::auth::{LoginRequest, TokenResponse};
use crate::handlers::error::login_error_response;

/// Handler for POST /auth/login
///
/// Authenticates by phone number and password and returns a fresh token
/// pair.
///
/// # Request Body
///
/// ```json
/// {
///     "phoneNum": "010-1111-2222",
///     "password": "secret"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "grantType": "Bearer",
///     "accessToken": "eyJ...",
///     "refreshToken": "eyJ..."
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: one generic plain-text body for every failure
///   (unknown number, wrong password, deleted account, storage trouble)
pub async fn login<U, R, B, I, C, P>(
    state: web::Data<AppState<U, R, B, I, C, P>>,
    request: web::Json<LoginRequest>,
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
        .login(&request.phone_num, &request.password)
        .await
    {
        Ok(pair) => HttpResponse::Ok().json(TokenResponse::from(pair)),
        Err(error) => login_error_response(&error),
    }
}
