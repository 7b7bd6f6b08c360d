//! HTTP Handlers

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    AuthenticateUseCase, SignInInput, SignInUseCase, token_issuer::TokenIssuer,
};
use crate::domain::repository::{CredentialRepository, UserRepository};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{LoginCredentials, LoginResponse, SessionResponse};
use crate::presentation::transport::TokenTransport;

/// Shared state for auth handlers
pub struct AuthAppState<R>
where
    R: UserRepository + CredentialRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub issuer: Arc<TokenIssuer>,
    pub transport: Arc<TokenTransport>,
}

impl<R> AuthAppState<R>
where
    R: UserRepository + CredentialRepository + Send + Sync + 'static,
{
    pub fn new(repo: R, config: AuthConfig) -> Self {
        Self {
            repo: Arc::new(repo),
            issuer: Arc::new(TokenIssuer::new(&config)),
            transport: Arc::new(TokenTransport::new(&config)),
            config: Arc::new(config),
        }
    }
}

impl<R> Clone for AuthAppState<R>
where
    R: UserRepository + CredentialRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            config: self.config.clone(),
            issuer: self.issuer.clone(),
            transport: self.transport.clone(),
        }
    }
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/token
///
/// Credentials come from a JSON body or, failing that, from the query
/// string. Either way they go through the same sign-in use case.
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    uri: Uri,
    body: Bytes,
) -> AuthResult<Response>
where
    R: UserRepository + CredentialRepository + Send + Sync + 'static,
{
    let input = match credentials_from_body(&body)? {
        Some(input) => input,
        None => credentials_from_query(&uri)?.ok_or_else(|| {
            AuthError::InvalidRequest("Both email and pwd are required".to_string())
        })?,
    };

    let use_case = SignInUseCase::new(state.repo.clone(), state.repo.clone(), state.issuer.clone());
    let output = use_case.execute(input).await?;

    let mut headers = HeaderMap::new();
    state.transport.attach(
        &mut headers,
        output.token.as_str(),
        output.token.claims().lifetime_secs(),
    )?;

    Ok((
        StatusCode::OK,
        headers,
        Json(LoginResponse {
            access_token: output.token.into_string(),
            subject_id: output.subject_id.to_hex(),
        }),
    )
        .into_response())
}

/// JSON body adapter
///
/// An empty body yields `None`; a body that is not a JSON object is a bad
/// request.
fn credentials_from_body(body: &[u8]) -> AuthResult<Option<SignInInput>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    let credentials: LoginCredentials = serde_json::from_slice(body)
        .map_err(|e| AuthError::InvalidRequest(format!("Invalid JSON body: {e}")))?;

    Ok(into_input(credentials))
}

/// Query string adapter
///
/// Only parsed when the body carries no credentials.
fn credentials_from_query(uri: &Uri) -> AuthResult<Option<SignInInput>> {
    let Query(credentials) = Query::<LoginCredentials>::try_from_uri(uri)
        .map_err(|e| AuthError::InvalidRequest(format!("Invalid query string: {e}")))?;

    Ok(into_input(credentials))
}

fn into_input(credentials: LoginCredentials) -> Option<SignInInput> {
    let (email, password) = credentials.complete()?;
    Some(SignInInput { email, password })
}

// ============================================================================
// Logout
// ============================================================================

/// DELETE /api/auth/token
///
/// Always clears the cookie. Tokens are stateless, so a copy kept by the
/// client stays valid until it expires.
pub async fn logout<R>(State(state): State<AuthAppState<R>>) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + CredentialRepository + Send + Sync + 'static,
{
    let mut headers = HeaderMap::new();
    state.transport.detach(&mut headers)?;

    tracing::info!("Session cookie cleared");

    Ok((StatusCode::NO_CONTENT, headers))
}

// ============================================================================
// Session Status
// ============================================================================

/// GET /api/auth/session
pub async fn session_status<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<Json<SessionResponse>>
where
    R: UserRepository + CredentialRepository + Send + Sync + 'static,
{
    let token = state.transport.extract(&headers);
    let gate = AuthenticateUseCase::new(state.repo.clone(), state.issuer.clone());

    let now = Utc::now();
    let identity = gate.execute_at(token.as_deref(), now).await?;

    Ok(Json(SessionResponse::from_identity(&identity, now)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_adapter() {
        let input = credentials_from_body(br#"{"email":"a@x.com","pwd":"secret"}"#)
            .unwrap()
            .unwrap();
        assert_eq!(input.email, "a@x.com");
        assert_eq!(input.password, "secret");

        assert!(credentials_from_body(b"").unwrap().is_none());
        assert!(credentials_from_body(b"  \n").unwrap().is_none());
        assert!(credentials_from_body(br#"{"email":"a@x.com"}"#).unwrap().is_none());
        assert!(matches!(
            credentials_from_body(b"{not json"),
            Err(AuthError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_query_adapter() {
        let uri: Uri = "/token?email=a%40x.com&pwd=secret".parse().unwrap();
        let input = credentials_from_query(&uri).unwrap().unwrap();
        assert_eq!(input.email, "a@x.com");
        assert_eq!(input.password, "secret");

        let bare: Uri = "/token".parse().unwrap();
        assert!(credentials_from_query(&bare).unwrap().is_none());

        let duplicated: Uri = "/token?email=a&email=b".parse().unwrap();
        assert!(matches!(
            credentials_from_query(&duplicated),
            Err(AuthError::InvalidRequest(_))
        ));
    }
}
