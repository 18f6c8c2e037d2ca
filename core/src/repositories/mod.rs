//! Repository interfaces for the domain layer.
//!
//! Each repository is an async trait implemented by the infrastructure
//! layer; in-memory mocks live alongside the traits for use in service
//! and API tests.

pub mod blacklist;
pub mod inquiry;
pub mod refresh_token;
pub mod user;

pub use blacklist::{BlacklistRepository, MockBlacklistRepository};
pub use inquiry::{InquiryRepository, MockInquiryRepository};
pub use refresh_token::{MockRefreshTokenRepository, RefreshTokenRepository};
pub use user::{MockUserRepository, UserRepository};
