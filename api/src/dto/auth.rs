//! Authentication DTOs.
//!
//! Bodies use camelCase field names; error responses on these endpoints
//! are plain text, not JSON.

use serde::{Deserialize, Serialize};

use ab_core::domain::entities::token::TokenPair;

/// Body of POST /auth/login
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub phone_num: String,
    pub password: String,
}

/// Query parameters of GET /auth/logout
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutQuery {
    pub access_token: String,
    pub refresh_token: String,
}

/// Token payload returned by login and refresh
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub grant_type: String,
    pub access_token: String,
    pub refresh_token: String,
}

impl From<TokenPair> for TokenResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            grant_type: "Bearer".to_string(),
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        }
    }
}
