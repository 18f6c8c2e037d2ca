//! Password verification against stored one-way hashes.

use tracing::warn;

/// Checks a presented password against a stored hash.
///
/// There is deliberately no decryption or hashing-for-storage surface here:
/// registration owns hash creation, the auth flows only ever verify.
pub trait PasswordVerifier: Send + Sync {
    /// Returns `true` when the password matches the stored hash.
    ///
    /// Fails closed: a malformed or unparsable hash is treated as a
    /// mismatch, never an error the caller could distinguish from one.
    fn matches(&self, password: &str, stored_hash: &str) -> bool;
}

/// Bcrypt-backed verifier.
#[derive(Debug, Default, Clone, Copy)]
pub struct BcryptVerifier;

impl BcryptVerifier {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordVerifier for BcryptVerifier {
    fn matches(&self, password: &str, stored_hash: &str) -> bool {
        match bcrypt::verify(password, stored_hash) {
            Ok(matched) => matched,
            Err(e) => {
                warn!(error = %e, "stored password hash could not be verified");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_password_verifies() {
        let hash = bcrypt::hash("correct", bcrypt::DEFAULT_COST).unwrap();
        assert!(BcryptVerifier::new().matches("correct", &hash));
    }

    #[test]
    fn test_wrong_password_is_rejected() {
        let hash = bcrypt::hash("correct", bcrypt::DEFAULT_COST).unwrap();
        assert!(!BcryptVerifier::new().matches("wrong", &hash));
    }

    #[test]
    fn test_malformed_hash_fails_closed() {
        assert!(!BcryptVerifier::new().matches("anything", "not-a-bcrypt-hash"));
        assert!(!BcryptVerifier::new().matches("anything", ""));
    }
}
