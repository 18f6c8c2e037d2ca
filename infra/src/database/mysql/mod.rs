//! MySQL repository implementations

mod inquiry_repository_impl;
mod refresh_token_repository_impl;
mod user_repository_impl;

pub use inquiry_repository_impl::MySqlInquiryRepository;
pub use refresh_token_repository_impl::MySqlRefreshTokenRepository;
pub use user_repository_impl::MySqlUserRepository;
