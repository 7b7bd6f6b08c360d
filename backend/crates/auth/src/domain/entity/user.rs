//! User Entity
//!
//! The subject a session token is issued for. Credentials live in
//! [`Credential`](super::credential::Credential).

use chrono::{DateTime, Utc};

use crate::domain::value_object::{UserId, email::Email};

/// User entity
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub user_id: UserId,
    /// Unique login key
    pub email: Email,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: Email) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            email,
            created_at: now,
            updated_at: now,
        }
    }
}
