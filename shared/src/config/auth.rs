//! Authentication configuration: JWT signing and phone-number encryption

use serde::{Deserialize, Serialize};

const DEFAULT_SECRET: &str = "development-secret-please-change-in-production";

/// JWT signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Symmetric secret for HS256 signing
    pub secret: String,

    /// Access token lifetime in minutes
    pub access_token_expiry_minutes: i64,

    /// Refresh token lifetime in days
    pub refresh_token_expiry_days: i64,

    /// Issuer claim embedded in every token
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            access_token_expiry_minutes: 30,
            refresh_token_expiry_days: 14,
            issuer: String::from("askboard"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with an explicit secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set the access token lifetime in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry_minutes = minutes;
        self
    }

    /// Set the refresh token lifetime in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_token_expiry_days = days;
        self
    }

    /// Check whether the default secret is still in use (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

/// Phone-number cipher configuration.
///
/// The key is fixed for the process lifetime: encrypted phone numbers are
/// the lookup keys for stored user records, so rotating the key would orphan
/// every existing row.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CipherConfig {
    /// Base64-encoded 32-byte AES key
    pub key_base64: String,
}

impl CipherConfig {
    pub fn new(key_base64: impl Into<String>) -> Self {
        Self {
            key_base64: key_base64.into(),
        }
    }

    /// Decode the configured key into raw bytes.
    ///
    /// Returns an error string suitable for startup diagnostics; callers
    /// must refuse to start on failure rather than fall back to a weak key.
    pub fn decode_key(&self) -> Result<[u8; 32], String> {
        use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

        let bytes = BASE64
            .decode(&self.key_base64)
            .map_err(|e| format!("PHONE_CIPHER_KEY is not valid base64: {}", e))?;
        let len = bytes.len();
        bytes
            .try_into()
            .map_err(|_| format!("PHONE_CIPHER_KEY must decode to 32 bytes, got {}", len))
    }
}

impl Default for CipherConfig {
    fn default() -> Self {
        // 32 zero bytes; only suitable for local development and tests
        Self {
            key_base64: String::from("AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA="),
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    pub jwt: JwtConfig,
    pub cipher: CipherConfig,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_SECRET.to_string());
        let access_token_expiry_minutes = std::env::var("JWT_ACCESS_TOKEN_EXPIRY_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);
        let refresh_token_expiry_days = std::env::var("JWT_REFRESH_TOKEN_EXPIRY_DAYS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(14);
        let issuer = std::env::var("JWT_ISSUER").unwrap_or_else(|_| "askboard".to_string());

        let cipher = std::env::var("PHONE_CIPHER_KEY")
            .map(CipherConfig::new)
            .unwrap_or_default();

        Self {
            jwt: JwtConfig {
                secret,
                access_token_expiry_minutes,
                refresh_token_expiry_days,
                issuer,
            },
            cipher,
        }
    }
}
