//! Token Issuer
//!
//! Creates and verifies signed session tokens. Pure functions of
//! `(claims, secret, now)`; nothing is persisted.

use std::time::Duration;

use chrono::{DateTime, Utc};
use platform::crypto::{constant_time_eq, from_base64url, hmac_sha256, to_base64url};

use crate::application::config::AuthConfig;
use crate::domain::entity::session_token::{SessionClaims, SessionToken};
use crate::domain::value_object::{UserId, freshness::FreshnessFactor};
use crate::error::{AuthError, AuthResult};

/// Signs and verifies session tokens with a process-wide secret
#[derive(Clone)]
pub struct TokenIssuer {
    secret: [u8; 32],
    lifetime: Duration,
    freshness: FreshnessFactor,
}

impl TokenIssuer {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            secret: config.signing_secret,
            lifetime: config.token_expiry,
            freshness: config.freshness_factor,
        }
    }

    /// Issue a token for `subject` with the configured lifetime and factor
    pub fn issue(&self, subject: UserId, now: DateTime<Utc>) -> AuthResult<SessionToken> {
        self.issue_with(subject, now, self.lifetime, self.freshness)
    }

    /// Issue a token with an explicit lifetime and freshness factor
    pub fn issue_with(
        &self,
        subject: UserId,
        now: DateTime<Utc>,
        lifetime: Duration,
        freshness: FreshnessFactor,
    ) -> AuthResult<SessionToken> {
        let claims = SessionClaims::new(subject, now, lifetime, freshness).ok_or_else(|| {
            AuthError::Configuration(format!("token lifetime {lifetime:?} is out of range"))
        })?;
        let payload = serde_json::to_vec(&claims)
            .map_err(|e| AuthError::Internal(format!("Failed to encode claims: {e}")))?;

        let body = to_base64url(&payload);
        let signature = to_base64url(&hmac_sha256(&self.secret, body.as_bytes()));

        Ok(SessionToken::new(claims, format!("{body}.{signature}")))
    }

    /// Check the signature and decode the claims
    ///
    /// Any failure is `MalformedToken`. Expiry is left to the caller, which
    /// owns the clock.
    pub fn verify(&self, token: &str) -> AuthResult<SessionClaims> {
        let (body, signature) = token.split_once('.').ok_or(AuthError::MalformedToken)?;
        if signature.contains('.') {
            return Err(AuthError::MalformedToken);
        }

        let signature = from_base64url(signature).map_err(|_| AuthError::MalformedToken)?;
        let expected = hmac_sha256(&self.secret, body.as_bytes());
        if !constant_time_eq(&expected, &signature) {
            return Err(AuthError::MalformedToken);
        }

        let payload = from_base64url(body).map_err(|_| AuthError::MalformedToken)?;
        let claims: SessionClaims =
            serde_json::from_slice(&payload).map_err(|_| AuthError::MalformedToken)?;

        if !claims.is_well_formed() {
            return Err(AuthError::MalformedToken);
        }

        Ok(claims)
    }
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("secret", &"[REDACTED]")
            .field("lifetime", &self.lifetime)
            .field("freshness", &self.freshness)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(&AuthConfig::development())
    }

    fn now() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_700_000_000_000).unwrap()
    }

    #[test]
    fn test_issue_then_verify() {
        let issuer = issuer();
        let subject = UserId::new();
        let token = issuer.issue(subject, now()).unwrap();

        let claims = issuer.verify(token.as_str()).unwrap();
        assert_eq!(&claims, token.claims());
        assert_eq!(claims.subject_id, subject);
        assert_eq!(claims.expires_at_ms - claims.issued_at_ms, 3_600_000);
        assert_eq!(claims.fresh_until_ms - claims.issued_at_ms, 1_800_000);
    }

    #[test]
    fn test_lifetime_and_freshness_windows() {
        let issuer = issuer();
        for secs in [1u64, 2, 59, 3600, 604_800] {
            for factor in [0.01, 0.333, 0.5, 0.75, 1.0] {
                let token = issuer
                    .issue_with(
                        UserId::new(),
                        now(),
                        Duration::from_secs(secs),
                        FreshnessFactor::new(factor).unwrap(),
                    )
                    .unwrap();
                let claims = issuer.verify(token.as_str()).unwrap();
                let lifetime_ms = secs as i64 * 1000;

                assert_eq!(claims.expires_at_ms - claims.issued_at_ms, lifetime_ms);
                assert_eq!(
                    claims.fresh_until_ms - claims.issued_at_ms,
                    (lifetime_ms as f64 * factor).round() as i64
                );
            }
        }
    }

    #[test]
    fn test_out_of_range_lifetime_is_an_error() {
        let config = AuthConfig {
            token_expiry: Duration::from_secs(10_000_000_000_000_000),
            ..AuthConfig::development()
        };
        let result = TokenIssuer::new(&config).issue(UserId::new(), now());
        assert!(matches!(result, Err(AuthError::Configuration(_))));
    }

    #[test]
    fn test_every_single_bit_flip_is_rejected() {
        let issuer = issuer();
        let token = issuer.issue(UserId::new(), now()).unwrap();
        let (body, signature) = token.as_str().split_once('.').unwrap();
        let payload = from_base64url(body).unwrap();

        for byte in 0..payload.len() {
            for bit in 0..8 {
                let mut tampered = payload.clone();
                tampered[byte] ^= 1 << bit;
                let forged = format!("{}.{}", to_base64url(&tampered), signature);
                assert!(
                    matches!(issuer.verify(&forged), Err(AuthError::MalformedToken)),
                    "flip of bit {bit} in byte {byte} was accepted"
                );
            }
        }
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = issuer().issue(UserId::new(), now()).unwrap();
        assert!(matches!(
            issuer().verify(token.as_str()),
            Err(AuthError::MalformedToken)
        ));
    }

    #[test]
    fn test_garbage_is_rejected() {
        let issuer = issuer();
        for garbage in ["", ".", "abc", "abc.def", "a.b.c", "!!!.???"] {
            assert!(
                matches!(issuer.verify(garbage), Err(AuthError::MalformedToken)),
                "{garbage:?} was accepted"
            );
        }
    }

    #[test]
    fn test_signed_but_ill_ordered_claims_are_rejected() {
        let issuer = issuer();
        let claims = SessionClaims {
            subject_id: UserId::new(),
            issued_at_ms: 100,
            expires_at_ms: 200,
            fresh_until_ms: 300,
        };
        let body = to_base64url(&serde_json::to_vec(&claims).unwrap());
        let signature = to_base64url(&hmac_sha256(&issuer.secret, body.as_bytes()));

        assert!(matches!(
            issuer.verify(&format!("{body}.{signature}")),
            Err(AuthError::MalformedToken)
        ));
    }

    #[test]
    fn test_debug_hides_secret() {
        assert!(format!("{:?}", issuer()).contains("[REDACTED]"));
    }
}
