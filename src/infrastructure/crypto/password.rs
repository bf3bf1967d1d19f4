//! Login password hashing
//!
//! Account passwords are stored only as bcrypt hashes; login compares the
//! submitted password against the stored hash.

use bcrypt::{hash, verify, DEFAULT_COST};

/// Hash a login password for storage.
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    hash(password, DEFAULT_COST)
}

/// Check a submitted login password against a stored hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    verify(password, hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_hash_accepts_only_the_original_password() {
        let hashed = hash_password("hunter22").unwrap();

        assert!(verify_password("hunter22", &hashed).unwrap());
        assert!(!verify_password("hunter23", &hashed).unwrap());
    }

    #[test]
    fn hashes_are_salted_per_call() {
        let first = hash_password("hunter22").unwrap();
        let second = hash_password("hunter22").unwrap();

        assert_ne!(first, second);
        assert!(verify_password("hunter22", &second).unwrap());
    }
}
