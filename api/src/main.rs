//! AskBoard API server entry point.
//!
//! Wires the MySQL and Redis stores, the crypto services, and the HTTP
//! application together. The JWT secret and the phone cipher key are
//! loaded here exactly once and injected into the services; nothing else
//! in the process reads them.

use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use dotenvy::dotenv;
use log::{info, warn};

use ab_core::services::auth::AuthService;
use ab_core::services::crypto::AesPhoneCipher;
use ab_core::services::inquiry::InquiryService;
use ab_core::services::password::BcryptVerifier;
use ab_core::services::token::{TokenCodec, TokenCodecConfig};
use ab_infra::cache::{RedisBlacklistRepository, RedisClient};
use ab_infra::database::{
    DatabasePool, MySqlInquiryRepository, MySqlRefreshTokenRepository, MySqlUserRepository,
};
use ab_shared::config::AppConfig;

use ab_api::app::{create_app, AppState};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables and initialize logging
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting AskBoard API server");

    let config = AppConfig::from_env();
    if config.auth.jwt.is_using_default_secret() {
        warn!("JWT_SECRET is not set; using the development default");
    }

    // Keys are decoded once at startup; a bad key is a refusal to start
    let cipher_key = config
        .auth
        .cipher
        .decode_key()
        .map_err(anyhow::Error::msg)
        .context("invalid phone cipher key")?;

    // Stores
    let pool = DatabasePool::new(config.database.clone())
        .await
        .context("failed to create database pool")?;
    let redis = RedisClient::new(config.cache.clone())
        .await
        .context("failed to connect to Redis")?;

    let user_repository = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
    let refresh_token_repository =
        Arc::new(MySqlRefreshTokenRepository::new(pool.get_pool().clone()));
    let inquiry_repository = Arc::new(MySqlInquiryRepository::new(pool.get_pool().clone()));
    let blacklist_repository = Arc::new(RedisBlacklistRepository::new(redis));

    // Services
    let codec = Arc::new(TokenCodec::new(TokenCodecConfig::from(&config.auth.jwt)));
    let cipher = Arc::new(AesPhoneCipher::new(cipher_key));
    let verifier = Arc::new(BcryptVerifier::new());

    let auth_service = Arc::new(AuthService::new(
        user_repository.clone(),
        refresh_token_repository,
        blacklist_repository,
        cipher,
        verifier,
        codec,
    ));
    let inquiry_service = Arc::new(InquiryService::new(inquiry_repository, user_repository));

    let app_state = web::Data::new(AppState {
        auth_service,
        inquiry_service,
    });

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await?;

    Ok(())
}
