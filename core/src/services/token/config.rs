//! Configuration for the token codec

use ab_shared::config::JwtConfig;

/// Configuration for the token codec
#[derive(Debug, Clone)]
pub struct TokenCodecConfig {
    /// Symmetric HS256 signing secret
    pub secret: String,
    /// Access token lifetime in minutes
    pub access_token_expiry_minutes: i64,
    /// Refresh token lifetime in days
    pub refresh_token_expiry_days: i64,
    /// Issuer claim, pinned during validation
    pub issuer: String,
}

impl Default for TokenCodecConfig {
    fn default() -> Self {
        Self::from(&JwtConfig::default())
    }
}

impl From<&JwtConfig> for TokenCodecConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            secret: config.secret.clone(),
            access_token_expiry_minutes: config.access_token_expiry_minutes,
            refresh_token_expiry_days: config.refresh_token_expiry_days,
            issuer: config.issuer.clone(),
        }
    }
}
