//! Credential Entity
//!
//! Salted password hash of a user. Kept apart from [`User`] so that the
//! Session Gate never loads password material.
//!
//! [`User`]: super::user::User

use chrono::{DateTime, Utc};
use platform::password::{self, ClearTextPassword};

use crate::domain::value_object::UserId;
use crate::error::{AuthError, AuthResult};

/// Credential entity
#[derive(Clone)]
pub struct Credential {
    pub user_id: UserId,
    pub password_hash: Vec<u8>,
    pub salt: Vec<u8>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Credential {
    /// Derive a credential for `password` with a fresh random salt
    pub fn derive(user_id: UserId, password: &ClearTextPassword) -> AuthResult<Self> {
        let salt = password::generate_salt();
        let hash = password::salted_hash(password, &salt)
            .map_err(|e| AuthError::Internal(e.to_string()))?;
        let now = Utc::now();

        Ok(Self {
            user_id,
            password_hash: hash.to_vec(),
            salt,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constant-time check of `password` against the stored hash
    pub fn verify(&self, password: &ClearTextPassword) -> bool {
        password::verify_salted(password, &self.salt, &self.password_hash)
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("user_id", &self.user_id)
            .field("password_hash", &"[HASH]")
            .field("salt", &"[SALT]")
            .finish()
    }
}
