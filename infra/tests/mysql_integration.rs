//! Integration tests for the MySQL refresh token repository
//!
//! These tests require a running MySQL instance with the askboard schema.
//! Run with: cargo test -p ab_infra --test mysql_integration -- --ignored

use uuid::Uuid;

use ab_core::domain::entities::token::RefreshToken;
use ab_core::repositories::RefreshTokenRepository;
use ab_infra::database::{DatabasePool, MySqlRefreshTokenRepository};
use ab_shared::config::DatabaseConfig;

async fn pool() -> DatabasePool {
    let config = DatabaseConfig::from_env();
    DatabasePool::new(config).await.expect("MySQL must be running")
}

#[tokio::test]
#[ignore] // Requires MySQL server
async fn test_save_is_an_upsert_per_user() {
    let repo = MySqlRefreshTokenRepository::new(pool().await.get_pool().clone());
    let user_id = Uuid::new_v4();

    repo.save(RefreshToken::new(user_id, format!("first-{}", user_id)))
        .await
        .unwrap();
    repo.save(RefreshToken::new(user_id, format!("second-{}", user_id)))
        .await
        .unwrap();

    let current = repo.find_by_user(user_id).await.unwrap().unwrap();
    assert_eq!(current.token, format!("second-{}", user_id));
    assert!(repo
        .find_by_token(&format!("first-{}", user_id))
        .await
        .unwrap()
        .is_none());

    repo.delete_by_token(&format!("second-{}", user_id))
        .await
        .unwrap();
}

#[tokio::test]
#[ignore] // Requires MySQL server
async fn test_reverse_lookup_and_delete() {
    let repo = MySqlRefreshTokenRepository::new(pool().await.get_pool().clone());
    let user_id = Uuid::new_v4();
    let token = format!("reverse-{}", user_id);

    repo.save(RefreshToken::new(user_id, token.clone())).await.unwrap();

    let found = repo.find_by_token(&token).await.unwrap().unwrap();
    assert_eq!(found.user_id, user_id);

    assert!(repo.delete_by_token(&token).await.unwrap());
    assert!(!repo.delete_by_token(&token).await.unwrap());
}
