//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims structure for the JWT payload.
///
/// Access tokens carry the user identifier in `sub`; refresh tokens are
/// pure bearer credentials and omit it. The `jti` keeps two tokens minted
/// within the same second from serializing to identical strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user identifier); absent on refresh tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates claims for an access token bound to a user.
    pub fn new_access_token(subject: &str, expiry_minutes: i64, issuer: &str) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::minutes(expiry_minutes);

        Self {
            sub: Some(subject.to_string()),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: issuer.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Creates claims for a subject-less refresh token.
    pub fn new_refresh_token(expiry_days: i64, issuer: &str) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::days(expiry_days);

        Self {
            sub: None,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: issuer.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Expiration as a UTC timestamp
    pub fn expiration(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

/// Refresh token record persisted per user.
///
/// At most one live refresh token exists per user: saving a new record
/// overwrites the previous one. Expiration is implicit in the token
/// encoding itself, so the record carries no expiry column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    /// User this token belongs to (storage key)
    pub user_id: Uuid,

    /// The refresh token string handed to the client
    pub token: String,

    /// Timestamp when the token was issued
    pub issued_at: DateTime<Utc>,
}

impl RefreshToken {
    /// Creates a new refresh token record
    pub fn new(user_id: Uuid, token: String) -> Self {
        Self {
            user_id,
            token,
            issued_at: Utc::now(),
        }
    }
}

/// Blacklist entry for a revoked token.
///
/// A blacklisted token stays rejected until its natural expiration passes;
/// after that the entry is logically dead and storage may drop it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlacklistEntry {
    /// The revoked token string (storage key)
    pub token: String,

    /// When the token itself expires
    pub expiration: DateTime<Utc>,
}

impl BlacklistEntry {
    /// Creates a new blacklist entry
    pub fn new(token: String, expiration: DateTime<Utc>) -> Self {
        Self { token, expiration }
    }

    /// Whether the underlying token has already expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expiration
    }

    /// Remaining time until the entry is dead, or zero if already past
    pub fn time_to_live(&self) -> Duration {
        let now = Utc::now();
        if self.expiration > now {
            self.expiration - now
        } else {
            Duration::zero()
        }
    }
}

/// Token pair returned to the client after login or refresh
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}
