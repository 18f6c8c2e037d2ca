//! JWT encoding, decoding, and validation.

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::TokenCodecConfig;

/// Encodes and verifies signed JWTs.
///
/// The signing secret is supplied once at construction and the prepared
/// keys are immutable afterwards, so a single codec instance is shared by
/// all request handlers. HMAC tag comparison happens inside `jsonwebtoken`
/// in constant time; the public `validate_token` surface does not reveal
/// whether a rejection was a bad signature or an expired token.
pub struct TokenCodec {
    config: TokenCodecConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    /// Creates a new codec from the given configuration.
    pub fn new(config: TokenCodecConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.validate_exp = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Mints a short-lived access token carrying the subject.
    pub fn create_access_token(&self, subject: &str) -> DomainResult<String> {
        let claims = Claims::new_access_token(
            subject,
            self.config.access_token_expiry_minutes,
            &self.config.issuer,
        );
        self.encode(&claims)
    }

    /// Mints a long-lived refresh token with no subject claim.
    ///
    /// The token is a pure bearer credential; its owner is recorded in the
    /// refresh token store, not in the token itself.
    pub fn create_refresh_token(&self) -> DomainResult<String> {
        let claims = Claims::new_refresh_token(
            self.config.refresh_token_expiry_days,
            &self.config.issuer,
        );
        self.encode(&claims)
    }

    /// Verifies signature integrity and expiry.
    ///
    /// Fails closed: malformed input, a bad signature, a wrong issuer, and
    /// an expired token all return `false`. Never panics or propagates an
    /// error to the caller.
    pub fn validate_token(&self, token: &str) -> bool {
        match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(_) => true,
            Err(e) => {
                debug!(error = %e, "token validation failed");
                false
            }
        }
    }

    /// Decodes a token and returns its claims.
    pub fn decode(&self, token: &str) -> DomainResult<Claims> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    DomainError::Token(TokenError::TokenExpired)
                }
                _ => DomainError::Token(TokenError::InvalidToken),
            }
        })?;
        Ok(data.claims)
    }

    /// Extracts the subject claim.
    ///
    /// Only meaningful for access-style tokens; refresh tokens carry no
    /// subject and yield `TokenError::MissingClaim`.
    pub fn subject(&self, token: &str) -> DomainResult<String> {
        self.decode(token)?.sub.ok_or(DomainError::Token(
            TokenError::MissingClaim {
                claim: "sub".to_string(),
            },
        ))
    }

    /// Extracts the expiration timestamp, for blacklist bookkeeping.
    pub fn expiration(&self, token: &str) -> DomainResult<DateTime<Utc>> {
        self.decode(token)?
            .expiration()
            .ok_or(DomainError::Token(TokenError::InvalidToken))
    }

    fn encode(&self, claims: &Claims) -> DomainResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }
}
