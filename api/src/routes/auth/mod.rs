//! Authentication route handlers
//!
//! - Login: phone number + password in exchange for a token pair
//! - Logout: blacklist a token pair and drop the refresh record
//! - Refresh: mint a new access token from a bearer refresh token

pub mod login;
pub mod logout;
pub mod refresh;

pub use login::login;
pub use logout::logout;
pub use refresh::refresh;
