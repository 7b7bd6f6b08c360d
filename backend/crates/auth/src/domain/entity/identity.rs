//! Resolved Identity
//!
//! Produced per request by the Session Gate; handlers scope their queries
//! with it.

use chrono::{DateTime, Utc};

use crate::domain::entity::session_token::SessionClaims;
use crate::domain::entity::user::User;
use crate::domain::value_object::{UserId, email::Email};

/// Authenticated subject of the current request
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub user_id: UserId,
    pub email: Email,
    pub issued_at_ms: i64,
    pub expires_at_ms: i64,
    pub fresh_until_ms: i64,
}

impl Identity {
    pub fn resolve(user: User, claims: &SessionClaims) -> Self {
        Self {
            user_id: user.user_id,
            email: user.email,
            issued_at_ms: claims.issued_at_ms,
            expires_at_ms: claims.expires_at_ms,
            fresh_until_ms: claims.fresh_until_ms,
        }
    }

    /// Whether the token was still inside its freshness window at `now`
    ///
    /// Informational only; no route requires a fresh token.
    pub fn is_fresh_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp_millis() < self.fresh_until_ms
    }
}
