//! Token Transport
//!
//! Moves session tokens in and out of the session cookie. No structural
//! validation happens here; that is the Session Gate's job.

use axum::http::{HeaderMap, header};
use platform::cookie::{self, CookieConfig};

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};

/// Cookie-based token transport
#[derive(Debug, Clone)]
pub struct TokenTransport {
    cookie: CookieConfig,
}

impl TokenTransport {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            cookie: config.cookie_config(),
        }
    }

    /// Append a Set-Cookie carrying `token` for `max_age_secs`
    pub fn attach(&self, headers: &mut HeaderMap, token: &str, max_age_secs: u64) -> AuthResult<()> {
        let value = cookie::to_header_value(&self.cookie.build_set_cookie(token, max_age_secs))
            .ok_or_else(|| AuthError::Internal("Session cookie is not a valid header".to_string()))?;
        headers.append(header::SET_COOKIE, value);
        Ok(())
    }

    /// Append a Set-Cookie that clears the session cookie
    pub fn detach(&self, headers: &mut HeaderMap) -> AuthResult<()> {
        let value = cookie::to_header_value(&self.cookie.build_delete_cookie())
            .ok_or_else(|| AuthError::Internal("Session cookie is not a valid header".to_string()))?;
        headers.append(header::SET_COOKIE, value);
        Ok(())
    }

    /// Token from the request's session cookie, if present and non-empty
    pub fn extract(&self, headers: &HeaderMap) -> Option<String> {
        cookie::extract_cookie(headers, &self.cookie.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn transport() -> TokenTransport {
        TokenTransport::new(&AuthConfig::development())
    }

    /// What a browser would send back after receiving `set_cookie`
    fn echo(set_cookie: &HeaderValue) -> HeaderMap {
        let pair = set_cookie.to_str().unwrap().split(';').next().unwrap().to_string();
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(&pair).unwrap());
        headers
    }

    #[test]
    fn test_extract_returns_attached_token() {
        let transport = transport();
        for token in ["abc.def", "eyJzdWIiOiJ4In0.c2ln", "x"] {
            let mut response = HeaderMap::new();
            transport.attach(&mut response, token, 3600).unwrap();

            let set_cookie = response.get(header::SET_COOKIE).unwrap();
            assert!(set_cookie.to_str().unwrap().contains("Max-Age=3600"));
            assert_eq!(transport.extract(&echo(set_cookie)), Some(token.to_string()));
        }
    }

    #[test]
    fn test_detach_clears_cookie() {
        let transport = transport();
        let mut response = HeaderMap::new();
        transport.detach(&mut response).unwrap();

        let set_cookie = response.get(header::SET_COOKIE).unwrap();
        let text = set_cookie.to_str().unwrap();
        assert!(text.starts_with("access_token_cookie=;"));
        assert!(text.contains("Max-Age=0"));
        assert_eq!(transport.extract(&echo(set_cookie)), None);
    }

    #[test]
    fn test_extract_without_cookie() {
        assert_eq!(transport().extract(&HeaderMap::new()), None);
    }

    #[test]
    fn test_cookie_is_http_only() {
        let mut response = HeaderMap::new();
        transport().attach(&mut response, "t", 1).unwrap();
        assert!(
            response[header::SET_COOKIE]
                .to_str()
                .unwrap()
                .contains("HttpOnly")
        );
    }
}
