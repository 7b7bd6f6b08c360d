//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entity::identity::Identity;

// ============================================================================
// Login
// ============================================================================

/// Login credentials, from a JSON body or from query parameters
///
/// Both fields are optional at this layer so that a body missing one of
/// them can fall back to the query string.
#[derive(Clone, Default, Deserialize)]
pub struct LoginCredentials {
    pub email: Option<String>,
    pub pwd: Option<String>,
}

impl LoginCredentials {
    /// Both fields, if both were supplied
    pub fn complete(self) -> Option<(String, String)> {
        Some((self.email?, self.pwd?))
    }
}

impl std::fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("pwd", &self.pwd.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Login response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub subject_id: String,
}

// ============================================================================
// Session
// ============================================================================

/// Session status response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub subject_id: String,
    pub email: String,
    pub expires_at_ms: i64,
    pub fresh_until_ms: i64,
    pub fresh: bool,
}

impl SessionResponse {
    pub fn from_identity(identity: &Identity, now: chrono::DateTime<chrono::Utc>) -> Self {
        Self {
            subject_id: identity.user_id.to_hex(),
            email: identity.email.as_str().to_string(),
            expires_at_ms: identity.expires_at_ms,
            fresh_until_ms: identity.fresh_until_ms,
            fresh: identity.is_fresh_at(now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_needs_both_fields() {
        let both = LoginCredentials {
            email: Some("a@x.com".into()),
            pwd: Some("secret".into()),
        };
        assert_eq!(
            both.complete(),
            Some(("a@x.com".to_string(), "secret".to_string()))
        );

        let only_email = LoginCredentials {
            email: Some("a@x.com".into()),
            pwd: None,
        };
        assert_eq!(only_email.complete(), None);
        assert_eq!(LoginCredentials::default().complete(), None);
    }

    #[test]
    fn test_login_response_is_camel_case() {
        let json = serde_json::to_value(LoginResponse {
            access_token: "t".into(),
            subject_id: "507f1f77bcf86cd799439011".into(),
        })
        .unwrap();
        assert_eq!(json["accessToken"], "t");
        assert_eq!(json["subjectId"], "507f1f77bcf86cd799439011");
    }

    #[test]
    fn test_debug_hides_password() {
        let creds = LoginCredentials {
            email: Some("a@x.com".into()),
            pwd: Some("secret".into()),
        };
        assert!(!format!("{creds:?}").contains("secret"));
    }
}
