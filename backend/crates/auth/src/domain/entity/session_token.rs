//! Session Token Entity
//!
//! Self-contained, signed session token. Nothing is stored server-side: a
//! token is valid when its signature checks out and `now < expiresAt`.
//!
//! Wire form: `base64url(json(claims)) "." base64url(hmac_sha256(secret, part1))`.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_object::{UserId, freshness::FreshnessFactor};

/// Signed payload of a session token
///
/// All timestamps are Unix milliseconds.
/// Invariant: `issued_at_ms <= fresh_until_ms <= expires_at_ms`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    #[serde(rename = "sub")]
    pub subject_id: UserId,
    #[serde(rename = "iat")]
    pub issued_at_ms: i64,
    #[serde(rename = "exp")]
    pub expires_at_ms: i64,
    #[serde(rename = "fresh")]
    pub fresh_until_ms: i64,
}

impl SessionClaims {
    /// Claims for a token issued at `now` that lives `lifetime`
    ///
    /// `None` when the expiry falls outside the `i64` millisecond range.
    pub fn new(
        subject_id: UserId,
        now: DateTime<Utc>,
        lifetime: Duration,
        freshness: FreshnessFactor,
    ) -> Option<Self> {
        let issued_at_ms = now.timestamp_millis();
        let lifetime_ms = i64::try_from(lifetime.as_millis()).ok()?;

        Some(Self {
            subject_id,
            issued_at_ms,
            expires_at_ms: issued_at_ms.checked_add(lifetime_ms)?,
            fresh_until_ms: issued_at_ms.checked_add(freshness.window_ms(lifetime)?)?,
        })
    }

    pub fn is_well_formed(&self) -> bool {
        self.issued_at_ms <= self.fresh_until_ms && self.fresh_until_ms <= self.expires_at_ms
    }

    /// Expired once `now >= expiresAt`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp_millis() >= self.expires_at_ms
    }

    pub fn is_fresh_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp_millis() < self.fresh_until_ms
    }

    /// Full lifetime in whole seconds; the transport cookie's Max-Age
    pub fn lifetime_secs(&self) -> u64 {
        ((self.expires_at_ms - self.issued_at_ms).max(0) / 1000) as u64
    }
}

/// Issued token: the claims plus their signed string form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken {
    claims: SessionClaims,
    value: String,
}

impl SessionToken {
    /// Pair claims with an already signed value
    pub(crate) fn new(claims: SessionClaims, value: String) -> Self {
        Self { claims, value }
    }

    pub fn claims(&self) -> &SessionClaims {
        &self.claims
    }

    /// Signed string carried by the cookie
    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    #[test]
    fn test_timestamps_follow_lifetime_and_factor() {
        let now = at(1_700_000_000_000);
        let cases = [(1u64, 1.0), (60, 0.5), (3600, 0.25), (86_400, 0.9), (7, 0.3)];

        for (secs, factor) in cases {
            let claims = SessionClaims::new(
                UserId::new(),
                now,
                Duration::from_secs(secs),
                FreshnessFactor::new(factor).unwrap(),
            )
            .unwrap();

            let lifetime_ms = secs as i64 * 1000;
            assert_eq!(claims.expires_at_ms - claims.issued_at_ms, lifetime_ms);
            assert_eq!(
                claims.fresh_until_ms - claims.issued_at_ms,
                (lifetime_ms as f64 * factor).round() as i64
            );
            assert!(claims.is_well_formed());
            assert_eq!(claims.lifetime_secs(), secs);
        }
    }

    #[test]
    fn test_expiry_boundary() {
        let now = at(1_000_000);
        let claims = SessionClaims::new(
            UserId::new(),
            now,
            Duration::from_secs(10),
            FreshnessFactor::default(),
        )
        .unwrap();

        assert!(!claims.is_expired_at(at(1_000_000 + 9_999)));
        assert!(claims.is_expired_at(at(1_000_000 + 10_000)));
        assert!(claims.is_fresh_at(at(1_000_000 + 4_999)));
        assert!(!claims.is_fresh_at(at(1_000_000 + 5_000)));
    }

    #[test]
    fn test_overflowing_lifetime_yields_no_claims() {
        let now = at(1_700_000_000_000);
        for lifetime in [
            Duration::from_secs(10_000_000_000_000_000),
            Duration::from_millis(i64::MAX as u64),
            Duration::MAX,
        ] {
            assert!(
                SessionClaims::new(UserId::new(), now, lifetime, FreshnessFactor::default())
                    .is_none(),
                "{lifetime:?} produced claims"
            );
        }
    }

    #[test]
    fn test_out_of_order_claims_are_not_well_formed() {
        let claims = SessionClaims {
            subject_id: UserId::new(),
            issued_at_ms: 10,
            expires_at_ms: 20,
            fresh_until_ms: 30,
        };
        assert!(!claims.is_well_formed());
    }

    #[test]
    fn test_claims_json_shape() {
        let claims = SessionClaims {
            subject_id: UserId::parse_str("507f1f77bcf86cd799439011").unwrap(),
            issued_at_ms: 1,
            expires_at_ms: 3,
            fresh_until_ms: 2,
        };
        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["sub"], "507f1f77bcf86cd799439011");
        assert_eq!(json["iat"], 1);
        assert_eq!(json["exp"], 3);
        assert_eq!(json["fresh"], 2);
    }
}
