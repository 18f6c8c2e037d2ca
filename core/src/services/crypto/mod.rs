//! Cryptographic services for lookup-key encryption

mod phone_cipher;

pub use phone_cipher::{AesPhoneCipher, PhoneCipher};
