//! Main authentication service implementation

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::token::{BlacklistEntry, RefreshToken, TokenPair};
use crate::errors::{AuthError, DomainError, DomainResult, TokenError};
use crate::repositories::{BlacklistRepository, RefreshTokenRepository, UserRepository};
use crate::services::crypto::PhoneCipher;
use crate::services::password::PasswordVerifier;
use crate::services::token::TokenCodec;

/// Prefix of the Authorization header value on refresh calls
const BEARER_PREFIX: &str = "Bearer ";

/// Authentication service orchestrating the login, logout, and refresh
/// flows over the user store, the token stores, and the crypto services.
///
/// All collaborators are injected at startup; the service itself holds no
/// mutable state, so one instance is shared across request handlers.
pub struct AuthService<U, R, B, C, P>
where
    U: UserRepository,
    R: RefreshTokenRepository,
    B: BlacklistRepository,
    C: PhoneCipher,
    P: PasswordVerifier,
{
    user_repository: Arc<U>,
    refresh_token_repository: Arc<R>,
    blacklist_repository: Arc<B>,
    cipher: Arc<C>,
    password_verifier: Arc<P>,
    codec: Arc<TokenCodec>,
}

impl<U, R, B, C, P> AuthService<U, R, B, C, P>
where
    U: UserRepository,
    R: RefreshTokenRepository,
    B: BlacklistRepository,
    C: PhoneCipher,
    P: PasswordVerifier,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        refresh_token_repository: Arc<R>,
        blacklist_repository: Arc<B>,
        cipher: Arc<C>,
        password_verifier: Arc<P>,
        codec: Arc<TokenCodec>,
    ) -> Self {
        Self {
            user_repository,
            refresh_token_repository,
            blacklist_repository,
            cipher,
            password_verifier,
            codec,
        }
    }

    /// Authenticate a user by phone number and password and issue a token
    /// pair.
    ///
    /// Unknown phone numbers and wrong passwords both yield
    /// `AuthError::InvalidCredentials`: the two cases must stay
    /// indistinguishable to the caller. Soft-deleted users are rejected
    /// even with correct credentials.
    ///
    /// Minting and the refresh-record write are not transactional. If the
    /// write fails after minting, the caller gets an error and retries;
    /// a client left holding unpersisted tokens only loses the ability to
    /// refresh, since access tokens validate on their own.
    pub async fn login(&self, phone_number: &str, password: &str) -> DomainResult<TokenPair> {
        // Step 1: encrypt the phone number and look the user up by ciphertext
        let phone_enc = self.cipher.encrypt(phone_number)?;
        let user = self
            .user_repository
            .find_by_phone_enc(&phone_enc)
            .await?
            .ok_or(DomainError::Auth(AuthError::InvalidCredentials))?;

        // Step 2: verify the password against the stored hash
        if !self.password_verifier.matches(password, &user.password_hash) {
            debug!(user_id = %user.id, "password mismatch");
            return Err(DomainError::Auth(AuthError::InvalidCredentials));
        }

        // Step 3: soft-deleted users are treated as absent
        if user.is_deleted {
            debug!(user_id = %user.id, "login attempt for deleted user");
            return Err(DomainError::Auth(AuthError::UserDeleted));
        }

        // Step 4: mint the token pair
        let access_token = self.codec.create_access_token(&user.id.to_string())?;
        let refresh_token = self.codec.create_refresh_token()?;

        // Step 5: persist the refresh token, replacing any prior record
        self.refresh_token_repository
            .save(RefreshToken::new(user.id, refresh_token.clone()))
            .await?;

        info!(user_id = %user.id, "login succeeded");
        Ok(TokenPair::new(access_token, refresh_token))
    }

    /// Revoke a token pair.
    ///
    /// Both tokens must still be valid; invalid input is rejected before
    /// any side effect. Blacklisting happens as two independent writes --
    /// a failure between them is surfaced as a storage error and not
    /// rolled back. Re-running logout with already-blacklisted tokens
    /// simply overwrites the entries.
    pub async fn logout(&self, access_token: &str, refresh_token: &str) -> DomainResult<()> {
        // Step 1: both tokens must pass signature and expiry checks
        if !self.codec.validate_token(access_token) || !self.codec.validate_token(refresh_token) {
            return Err(DomainError::Token(TokenError::InvalidToken));
        }

        // Step 2: blacklist both tokens until their natural expiry
        let access_exp = self.codec.expiration(access_token)?;
        let refresh_exp = self.codec.expiration(refresh_token)?;

        self.blacklist_repository
            .save(BlacklistEntry::new(access_token.to_string(), access_exp))
            .await?;
        self.blacklist_repository
            .save(BlacklistEntry::new(refresh_token.to_string(), refresh_exp))
            .await?;

        // Step 3: drop the stored refresh record
        let deleted = self
            .refresh_token_repository
            .delete_by_token(refresh_token)
            .await?;
        if !deleted {
            // Already gone (e.g. a second logout); the tokens are
            // blacklisted either way.
            debug!("logout for a refresh token with no stored record");
        }

        info!("logout succeeded");
        Ok(())
    }

    /// Mint a new access token from a refresh token presented in an
    /// `Authorization: Bearer <token>` header.
    ///
    /// Refresh tokens carry no subject claim, so the owner is recovered
    /// through the refresh store's reverse lookup. Blacklisted refresh
    /// tokens are rejected even though they still pass signature and
    /// expiry checks. The refresh token itself is returned unchanged;
    /// there is no rotation.
    pub async fn refresh(&self, authorization: Option<&str>) -> DomainResult<TokenPair> {
        // Step 1: extract the bearer token from the header
        let refresh_token = authorization
            .and_then(|h| h.strip_prefix(BEARER_PREFIX))
            .filter(|t| !t.is_empty())
            .ok_or(DomainError::Auth(AuthError::MissingAuthorizationHeader))?;

        // Step 2: signature and expiry
        if !self.codec.validate_token(refresh_token) {
            return Err(DomainError::Token(TokenError::InvalidRefreshToken));
        }

        // Step 3: revoked tokens stay dead until natural expiry
        if self.blacklist_repository.contains(refresh_token).await? {
            warn!("refresh attempted with a blacklisted token");
            return Err(DomainError::Token(TokenError::TokenRevoked));
        }

        // Step 4: recover the owner via reverse lookup
        let record = self
            .refresh_token_repository
            .find_by_token(refresh_token)
            .await?
            .ok_or(DomainError::Token(TokenError::InvalidRefreshToken))?;

        // Step 5: mint a fresh access token; the refresh token is reused
        let access_token = self
            .codec
            .create_access_token(&record.user_id.to_string())?;

        info!(user_id = %record.user_id, "access token refreshed");
        Ok(TokenPair::new(access_token, refresh_token.to_string()))
    }
}
