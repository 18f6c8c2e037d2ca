//! Token blacklist repository interface and mock

pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;

pub mod mock;

pub use mock::MockBlacklistRepository;
pub use r#trait::BlacklistRepository;

#[cfg(test)]
mod tests;
