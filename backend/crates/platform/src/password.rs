//! Salted Password Derivation and Verification
//!
//! Credentials are stored as a `(salt, hash)` pair where
//! `hash = Argon2id(NFKC(password), salt)` with default parameters. The
//! derivation is deterministic for a given salt so that verification is a
//! plain re-derivation followed by a constant-time comparison.
//!
//! ## Security Features
//! - Memory-hard hashing (Argon2id)
//! - Zeroization of clear-text passwords
//! - Constant-time comparison
//! - Verification fails closed on any derivation error

use std::fmt;

use argon2::Argon2;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::{constant_time_eq, random_bytes};

/// Salt length in bytes (128 bits)
pub const SALT_LEN: usize = 16;

/// Derived hash length in bytes
pub const HASH_LEN: usize = 32;

/// Password derivation errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Argon2 rejected the input (e.g. salt too short)
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// No policy is enforced here: stored credentials must verify exactly as
/// they were created. Input is NFKC-normalized so visually identical
/// passwords derive the same hash.
///
/// ## Examples
/// ```rust
/// use platform::password::ClearTextPassword;
///
/// let password = ClearTextPassword::new("secret");
/// assert!(format!("{password:?}").contains("REDACTED"));
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    pub fn new(raw: impl Into<String>) -> Self {
        let mut raw = raw.into();
        let normalized: String = raw.nfkc().collect();
        raw.zeroize();
        Self(normalized)
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Salted Hash
// ============================================================================

/// Generate a fresh random salt
pub fn generate_salt() -> Vec<u8> {
    random_bytes(SALT_LEN)
}

/// Derive the salted hash of `password`
///
/// Same function at registration and at verification time.
pub fn salted_hash(
    password: &ClearTextPassword,
    salt: &[u8],
) -> Result<[u8; HASH_LEN], PasswordHashError> {
    let mut out = [0u8; HASH_LEN];
    Argon2::default()
        .hash_password_into(password.as_bytes(), salt, &mut out)
        .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;
    Ok(out)
}

/// Check `password` against a stored `(salt, hash)` pair
///
/// Returns `false` on any derivation error.
pub fn verify_salted(password: &ClearTextPassword, salt: &[u8], stored_hash: &[u8]) -> bool {
    match salted_hash(password, salt) {
        Ok(derived) => constant_time_eq(&derived, stored_hash),
        Err(_) => false,
    }
}
