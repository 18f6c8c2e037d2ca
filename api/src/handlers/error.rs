//! Domain-error to HTTP mapping.
//!
//! Each flow gets its own mapping function: the domain keeps precise
//! tagged variants, and this boundary decides per endpoint how much of
//! that identity the caller may see. Login deliberately collapses every
//! failure into one generic body so that unknown numbers, wrong passwords,
//! and deleted accounts are indistinguishable from the outside. Logout is
//! the one place where storage detail is echoed back, an operability
//! trade-off inherited from the system this replaces.
//!
//! Error bodies on the auth endpoints are plain text, matching the
//! original wire contract; the inquiry endpoints use plain text as well.

use actix_web::HttpResponse;
use log::error;

use ab_core::errors::{AuthError, DomainError, TokenError};

/// Generic body for every login failure
pub const LOGIN_FAILED: &str = "An error occurred during login.";

/// Body for logout with structurally invalid tokens
pub const LOGOUT_INVALID_TOKEN: &str = "Invalid token.";

/// Success body for logout
pub const LOGOUT_SUCCESS: &str = "Logout successful!";

/// Map a login failure. Always a 401 with the same body: the error is
/// logged with full fidelity, the caller learns nothing.
pub fn login_error_response(err: &DomainError) -> HttpResponse {
    error!("login failed: {:?}", err);
    HttpResponse::Unauthorized().body(LOGIN_FAILED)
}

/// Map a logout failure. Invalid tokens are a 400 before any side effect;
/// storage failures surface as a 500 with detail.
pub fn logout_error_response(err: &DomainError) -> HttpResponse {
    error!("logout failed: {:?}", err);
    match err {
        DomainError::Token(_) => HttpResponse::BadRequest().body(LOGOUT_INVALID_TOKEN),
        DomainError::Storage { message } => HttpResponse::InternalServerError()
            .body(format!("An error occurred during logout: {}", message)),
        other => HttpResponse::InternalServerError()
            .body(format!("An error occurred during logout: {}", other)),
    }
}

/// Map a refresh failure. Everything is a 401 with a short reason.
pub fn refresh_error_response(err: &DomainError) -> HttpResponse {
    error!("token refresh failed: {:?}", err);
    let reason = match err {
        DomainError::Auth(AuthError::MissingAuthorizationHeader) => {
            "Authorization header is missing or not a Bearer token".to_string()
        }
        DomainError::Token(TokenError::TokenRevoked) => {
            "refresh token has been revoked".to_string()
        }
        DomainError::Token(TokenError::TokenExpired) => "refresh token has expired".to_string(),
        DomainError::Token(_) => "refresh token is invalid".to_string(),
        other => other.to_string(),
    };
    HttpResponse::Unauthorized().body(format!("Error: {}", reason))
}

/// Map an inquiry failure: missing users and posts are 404s, storage
/// problems are 500s.
pub fn inquiry_error_response(err: &DomainError) -> HttpResponse {
    error!("inquiry request failed: {:?}", err);
    match err {
        DomainError::Auth(AuthError::UserNotFound) => {
            HttpResponse::NotFound().body("User does not exist.")
        }
        DomainError::NotFound { resource } => {
            HttpResponse::NotFound().body(format!("Not found: {}", resource))
        }
        DomainError::Validation { message } => HttpResponse::BadRequest().body(message.clone()),
        _ => HttpResponse::InternalServerError().body("An internal error occurred."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_errors_share_one_body() {
        let a = login_error_response(&DomainError::Auth(AuthError::InvalidCredentials));
        let b = login_error_response(&DomainError::Auth(AuthError::UserDeleted));
        let c = login_error_response(&DomainError::Storage {
            message: "db down".to_string(),
        });

        assert_eq!(a.status(), 401);
        assert_eq!(b.status(), 401);
        assert_eq!(c.status(), 401);
    }

    #[test]
    fn test_logout_distinguishes_invalid_token_from_storage() {
        let invalid = logout_error_response(&DomainError::Token(TokenError::InvalidToken));
        assert_eq!(invalid.status(), 400);

        let storage = logout_error_response(&DomainError::Storage {
            message: "redis unreachable".to_string(),
        });
        assert_eq!(storage.status(), 500);
    }

    #[test]
    fn test_refresh_errors_are_unauthorized() {
        let missing =
            refresh_error_response(&DomainError::Auth(AuthError::MissingAuthorizationHeader));
        assert_eq!(missing.status(), 401);

        let revoked = refresh_error_response(&DomainError::Token(TokenError::TokenRevoked));
        assert_eq!(revoked.status(), 401);
    }
}
