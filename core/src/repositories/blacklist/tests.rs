//! Tests for the mock blacklist repository

use chrono::{Duration, Utc};

use crate::domain::entities::token::BlacklistEntry;
use crate::repositories::blacklist::{BlacklistRepository, MockBlacklistRepository};

#[tokio::test]
async fn test_blacklisted_token_is_contained() {
    let repo = MockBlacklistRepository::new();
    let entry = BlacklistEntry::new("token-a".to_string(), Utc::now() + Duration::minutes(30));

    repo.save(entry).await.unwrap();

    assert!(repo.contains("token-a").await.unwrap());
    assert!(!repo.contains("token-b").await.unwrap());
}

#[tokio::test]
async fn test_duplicate_save_is_harmless() {
    let repo = MockBlacklistRepository::new();
    let exp = Utc::now() + Duration::minutes(30);

    repo.save(BlacklistEntry::new("token".to_string(), exp))
        .await
        .unwrap();
    repo.save(BlacklistEntry::new("token".to_string(), exp))
        .await
        .unwrap();

    assert!(repo.contains("token").await.unwrap());
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_expired_entry_is_not_contained() {
    let repo = MockBlacklistRepository::new();
    let dead = BlacklistEntry::new("dead".to_string(), Utc::now() - Duration::minutes(1));

    // Saving an already-dead entry is a no-op
    repo.save(dead).await.unwrap();
    assert!(!repo.contains("dead").await.unwrap());
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_purge_expired() {
    let repo = MockBlacklistRepository::new();
    let live = BlacklistEntry::new("live".to_string(), Utc::now() + Duration::minutes(5));
    let soon = BlacklistEntry::new("soon".to_string(), Utc::now() + Duration::milliseconds(1));

    repo.save(live).await.unwrap();
    repo.save(soon).await.unwrap();
    assert_eq!(repo.len().await, 2);

    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    assert_eq!(repo.purge_expired().await.unwrap(), 1);
    assert!(repo.contains("live").await.unwrap());
    assert!(!repo.contains("soon").await.unwrap());
}
