//! Deterministic phone-number encryption.
//!
//! Phone numbers are stored encrypted and looked up by their ciphertext:
//! the login flow encrypts the presented number and matches it against the
//! stored column. That only works if encryption is deterministic, so this
//! cipher derives its AES-GCM nonce from the key and plaintext instead of
//! drawing it at random. Determinism trades semantic security (equal
//! plaintexts are visible as equal ciphertexts) for queryability; the seam
//! is a trait so a keyed-hash lookup could replace it without touching
//! callers.
//!
//! The key is fixed for the process lifetime. Rotating it would orphan
//! every stored lookup key, which is out of scope here.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Key, Nonce,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use sha2::{Digest, Sha256};

use crate::errors::{DomainError, DomainResult};

/// Nonce length for AES-GCM
const NONCE_LEN: usize = 12;

/// Symmetric cipher for phone-number lookup keys
pub trait PhoneCipher: Send + Sync {
    /// Encrypt a phone number; equal inputs produce equal outputs.
    fn encrypt(&self, plaintext: &str) -> DomainResult<String>;

    /// Decrypt a previously produced ciphertext.
    fn decrypt(&self, ciphertext: &str) -> DomainResult<String>;
}

/// AES-256-GCM implementation with a derived (deterministic) nonce.
///
/// The nonce is the first 12 bytes of `SHA-256(key || plaintext)`, so the
/// same plaintext under the same key always yields the same
/// `base64(nonce || ciphertext)` envelope.
pub struct AesPhoneCipher {
    cipher: Aes256Gcm,
    key: [u8; 32],
}

impl AesPhoneCipher {
    /// Create a cipher from a 32-byte key loaded at startup.
    pub fn new(key: [u8; 32]) -> Self {
        let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key));
        Self { cipher, key }
    }

    fn derive_nonce(&self, plaintext: &[u8]) -> [u8; NONCE_LEN] {
        let mut hasher = Sha256::new();
        hasher.update(self.key);
        hasher.update(plaintext);
        let digest = hasher.finalize();

        let mut nonce = [0u8; NONCE_LEN];
        nonce.copy_from_slice(&digest[..NONCE_LEN]);
        nonce
    }
}

impl PhoneCipher for AesPhoneCipher {
    fn encrypt(&self, plaintext: &str) -> DomainResult<String> {
        let nonce = self.derive_nonce(plaintext.as_bytes());
        let ciphertext = self
            .cipher
            .encrypt(Nonce::from_slice(&nonce), plaintext.as_bytes())
            .map_err(|_| DomainError::Internal {
                message: "phone number encryption failed".to_string(),
            })?;

        let mut envelope = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        envelope.extend_from_slice(&nonce);
        envelope.extend_from_slice(&ciphertext);
        Ok(BASE64.encode(envelope))
    }

    fn decrypt(&self, ciphertext: &str) -> DomainResult<String> {
        let envelope = BASE64.decode(ciphertext).map_err(|_| DomainError::Internal {
            message: "phone number ciphertext is not valid base64".to_string(),
        })?;
        if envelope.len() <= NONCE_LEN {
            return Err(DomainError::Internal {
                message: "phone number ciphertext is truncated".to_string(),
            });
        }

        let (nonce, body) = envelope.split_at(NONCE_LEN);
        let plaintext = self
            .cipher
            .decrypt(Nonce::from_slice(nonce), body)
            .map_err(|_| DomainError::Internal {
                message: "phone number decryption failed".to_string(),
            })?;

        String::from_utf8(plaintext).map_err(|_| DomainError::Internal {
            message: "decrypted phone number is not valid UTF-8".to_string(),
        })
    }
}
