//! Token refresh endpoint

use actix_web::{http::header, web, HttpRequest, HttpResponse};

use ab_core::repositories::{
    BlacklistRepository, InquiryRepository, RefreshTokenRepository, UserRepository,
};
use ab_core::services::crypto::PhoneCipher;
use ab_core::services::password::PasswordVerifier;

use crate::app::AppState;
use crate::dto::auth::TokenResponse;
use crate::handlers::error::refresh_error_response;

/// Handler for POST /auth/refresh
///
/// Mints a new access token from the refresh token presented in the
/// `Authorization: Bearer <refreshToken>` header. The refresh token is
/// returned unchanged.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "grantType": "Bearer",
///     "accessToken": "eyJ... (new)",
///     "refreshToken": "eyJ... (unchanged)"
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: missing/malformed header, invalid or expired
///   token, blacklisted token, or no stored record for the token
pub async fn refresh<U, R, B, I, C, P>(
    req: HttpRequest,
    state: web::Data<AppState<U, R, B, I, C, P>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RefreshTokenRepository + 'static,
    B: BlacklistRepository + 'static,
    I: InquiryRepository + 'static,
    C: PhoneCipher + 'static,
    P: PasswordVerifier + 'static,
{
    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    match state.auth_service.refresh(authorization).await {
        Ok(pair) => HttpResponse::Ok().json(TokenResponse::from(pair)),
        Err(error) => refresh_error_response(&error),
    }
}
