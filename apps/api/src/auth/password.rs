//! One-way salted password hashing.
//!
//! bcrypt at a fixed work factor of 10 — the cost the previous service used,
//! so hashes already in the database keep verifying. The plaintext is never
//! logged or stored; empty plaintexts are accepted here and rejected by the
//! auth service, which owns input validation.

use crate::errors::AppError;

/// bcrypt cost. The cost is encoded in each hash string, so raising it later
/// does not invalidate existing hashes.
pub const WORK_FACTOR: u32 = 10;

pub fn hash(plaintext: &str) -> Result<String, AppError> {
    Ok(bcrypt::hash(plaintext, WORK_FACTOR)?)
}

/// Whether `plaintext` matches `hashed`. A malformed stored hash counts as a
/// mismatch rather than an error.
pub fn verify(plaintext: &str, hashed: &str) -> bool {
    bcrypt::verify(plaintext, hashed).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_accepts_matching_plaintext() {
        let h = hash("hunter2").unwrap();
        assert!(verify("hunter2", &h));
    }

    #[test]
    fn test_verify_rejects_other_plaintext() {
        let h = hash("hunter2").unwrap();
        assert!(!verify("hunter3", &h));
        assert!(!verify("", &h));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash("same-password").unwrap();
        let b = hash("same-password").unwrap();
        assert_ne!(a, b);
        assert!(verify("same-password", &a));
        assert!(verify("same-password", &b));
    }

    #[test]
    fn test_empty_plaintext_is_hashable() {
        // Rejecting empty passwords is the auth service's job, not ours.
        let h = hash("").unwrap();
        assert!(verify("", &h));
        assert!(!verify("x", &h));
    }

    #[test]
    fn test_malformed_hash_is_a_mismatch() {
        assert!(!verify("anything", "not-a-bcrypt-hash"));
        assert!(!verify("anything", ""));
    }
}
