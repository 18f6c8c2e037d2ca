//! Domain-specific error types and error handling.
//!
//! Flow-level failures are explicit tagged variants rather than one broad
//! exception: the HTTP boundary matches on them to pick status codes, while
//! logs keep the precise cause. The login flow deliberately collapses
//! "unknown phone" and "wrong password" into `InvalidCredentials` so the
//! two are indistinguishable to the caller.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown phone number or wrong password; intentionally one variant
    /// to prevent account enumeration.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User does not exist")]
    UserDeleted,

    #[error("User not found")]
    UserNotFound,

    #[error("Authorization header is missing or not a Bearer token")]
    MissingAuthorizationHeader,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token has been revoked")]
    TokenRevoked,

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Missing required claim: {claim}")]
    MissingClaim { claim: String },

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Storage failure: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_bridges_into_domain_error() {
        let err: DomainError = AuthError::InvalidCredentials.into();
        assert_eq!(err, DomainError::Auth(AuthError::InvalidCredentials));
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[test]
    fn test_token_error_messages() {
        let err = TokenError::MissingClaim {
            claim: "sub".to_string(),
        };
        assert_eq!(err.to_string(), "Missing required claim: sub");
    }

    #[test]
    fn test_storage_error_carries_detail() {
        let err = DomainError::Storage {
            message: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("connection refused"));
    }
}
