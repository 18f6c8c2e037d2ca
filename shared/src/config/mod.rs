//! Configuration modules for the AskBoard backend

pub mod auth;
pub mod cache;
pub mod database;
pub mod server;

pub use auth::{AuthConfig, CipherConfig, JwtConfig};
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Complete application configuration, assembled once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub auth: AuthConfig,
    pub database: DatabaseConfig,
    pub cache: CacheConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    /// Load the full configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            auth: AuthConfig::from_env(),
            database: DatabaseConfig::from_env(),
            cache: CacheConfig::from_env(),
            server: ServerConfig::from_env(),
        }
    }
}
