//! Application Configuration
//!
//! Configuration for the Auth application layer. Loaded once at startup and
//! shared read-only behind an `Arc`.

use std::time::Duration;

use platform::cookie::CookieConfig;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

use crate::domain::value_object::freshness::FreshnessFactor;
use crate::error::{AuthError, AuthResult};

/// Longest accepted token lifetime (ten years)
pub const MAX_TOKEN_EXPIRY: Duration = Duration::from_secs(10 * 365 * 24 * 3600);

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub cookie_name: String,
    /// Secret key for HMAC token signing (32 bytes)
    pub signing_secret: [u8; 32],
    /// Token lifetime; also the cookie Max-Age
    pub token_expiry: Duration,
    /// Share of the lifetime during which a token counts as fresh
    pub freshness_factor: FreshnessFactor,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Cookie Path attribute
    pub cookie_path: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            cookie_name: "access_token_cookie".to_string(),
            signing_secret: [0u8; 32],
            token_expiry: Duration::from_secs(3600), // 1 hour
            freshness_factor: FreshnessFactor::default(),
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            cookie_path: "/".to_string(),
        }
    }
}

impl AuthConfig {
    /// Create config with a random signing secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            signing_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Reject configurations that would issue unusable or forgeable tokens
    pub fn validate(&self) -> AuthResult<()> {
        if self.signing_secret.iter().all(|&b| b == 0) {
            return Err(AuthError::Configuration(
                "signing secret must not be all zeros".to_string(),
            ));
        }
        if self.token_expiry < Duration::from_secs(1) {
            return Err(AuthError::Configuration(
                "token expiry must be at least one second".to_string(),
            ));
        }
        if self.token_expiry > MAX_TOKEN_EXPIRY {
            return Err(AuthError::Configuration(format!(
                "token expiry must not exceed {} seconds",
                MAX_TOKEN_EXPIRY.as_secs()
            )));
        }
        if self.cookie_name.is_empty()
            || !self
                .cookie_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(AuthError::Configuration(format!(
                "invalid cookie name: {:?}",
                self.cookie_name
            )));
        }
        Ok(())
    }

    /// Cookie attributes for the session cookie
    pub fn cookie_config(&self) -> CookieConfig {
        CookieConfig {
            name: self.cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: self.cookie_path.clone(),
        }
    }

    /// Token lifetime in whole seconds
    pub fn token_expiry_secs(&self) -> u64 {
        self.token_expiry.as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::token_issuer::TokenIssuer;
    use crate::domain::value_object::UserId;
    use chrono::Utc;

    #[test]
    fn test_default_config() {
        let config = AuthConfig::default();

        assert_eq!(config.cookie_name, "access_token_cookie");
        assert_eq!(config.token_expiry, Duration::from_secs(3600));
        assert_eq!(config.freshness_factor.get(), 0.5);
        assert!(config.cookie_secure);
        assert_eq!(config.cookie_same_site, SameSite::Lax);
        // zero secret must not pass validation
        assert!(matches!(
            config.validate(),
            Err(AuthError::Configuration(_))
        ));
    }

    #[test]
    fn test_with_random_secret() {
        let config1 = AuthConfig::with_random_secret();
        let config2 = AuthConfig::with_random_secret();

        assert_ne!(config1.signing_secret, config2.signing_secret);
        assert!(config1.validate().is_ok());
    }

    #[test]
    fn test_development_config() {
        let config = AuthConfig::development();

        assert!(!config.cookie_secure);
        assert!(!config.cookie_config().secure);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_sub_second_expiry() {
        let config = AuthConfig {
            token_expiry: Duration::from_millis(500),
            ..AuthConfig::development()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_huge_expiry() {
        let config = AuthConfig {
            token_expiry: Duration::from_secs(10_000_000_000_000_000),
            ..AuthConfig::development()
        };
        assert!(matches!(
            config.validate(),
            Err(AuthError::Configuration(_))
        ));

        let at_limit = AuthConfig {
            token_expiry: MAX_TOKEN_EXPIRY,
            ..AuthConfig::development()
        };
        assert!(at_limit.validate().is_ok());
        assert!(TokenIssuer::new(&at_limit).issue(UserId::new(), Utc::now()).is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_cookie_name() {
        let config = AuthConfig {
            cookie_name: "bad name;".to_string(),
            ..AuthConfig::development()
        };
        assert!(config.validate().is_err());
    }
}
