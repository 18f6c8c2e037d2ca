//! Domain entities

pub mod inquiry;
pub mod token;
pub mod user;

pub use inquiry::{Inquiry, NewInquiry};
pub use token::{BlacklistEntry, Claims, RefreshToken, TokenPair};
pub use user::User;
