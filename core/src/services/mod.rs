//! Business services

pub mod auth;
pub mod crypto;
pub mod inquiry;
pub mod password;
pub mod token;

pub use auth::AuthService;
pub use crypto::{AesPhoneCipher, PhoneCipher};
pub use inquiry::InquiryService;
pub use password::{BcryptVerifier, PasswordVerifier};
pub use token::{TokenCodec, TokenCodecConfig};
