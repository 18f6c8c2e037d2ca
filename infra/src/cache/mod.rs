//! Cache module - Redis client and the token blacklist store

pub mod blacklist_store;
pub mod redis_client;

pub use blacklist_store::RedisBlacklistRepository;
pub use redis_client::RedisClient;
