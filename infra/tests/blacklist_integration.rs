//! Integration tests for the Redis blacklist store
//!
//! These tests require a running Redis instance to execute.
//! Run with: cargo test -p ab_infra --test blacklist_integration -- --ignored

use chrono::{Duration, Utc};

use ab_core::domain::entities::token::BlacklistEntry;
use ab_core::repositories::BlacklistRepository;
use ab_infra::cache::{RedisBlacklistRepository, RedisClient};
use ab_shared::config::CacheConfig;

async fn client() -> RedisClient {
    let config = CacheConfig {
        url: std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string()),
        ..Default::default()
    };
    RedisClient::new(config).await.expect("Redis must be running")
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_blacklisted_token_is_contained_until_expiry() {
    let repo = RedisBlacklistRepository::new(client().await);
    let token = format!("integration.token.{}", Utc::now().timestamp_micros());

    repo.save(BlacklistEntry::new(
        token.clone(),
        Utc::now() + Duration::seconds(2),
    ))
    .await
    .unwrap();

    assert!(repo.contains(&token).await.unwrap());

    tokio::time::sleep(std::time::Duration::from_secs(3)).await;
    assert!(!repo.contains(&token).await.unwrap());
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_duplicate_save_overwrites() {
    let repo = RedisBlacklistRepository::new(client().await);
    let token = format!("integration.dup.{}", Utc::now().timestamp_micros());
    let exp = Utc::now() + Duration::minutes(1);

    repo.save(BlacklistEntry::new(token.clone(), exp)).await.unwrap();
    repo.save(BlacklistEntry::new(token.clone(), exp)).await.unwrap();

    assert!(repo.contains(&token).await.unwrap());
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_already_expired_entry_is_not_stored() {
    let repo = RedisBlacklistRepository::new(client().await);
    let token = format!("integration.dead.{}", Utc::now().timestamp_micros());

    repo.save(BlacklistEntry::new(
        token.clone(),
        Utc::now() - Duration::seconds(1),
    ))
    .await
    .unwrap();

    assert!(!repo.contains(&token).await.unwrap());
}
