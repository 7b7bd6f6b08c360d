//! Auth Middleware
//!
//! Session Gate as an axum middleware, plus an extractor for the identity it
//! resolves.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::{FromRequestParts, State};
use axum::http::Request;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;

use crate::application::config::AuthConfig;
use crate::application::{AuthenticateUseCase, token_issuer::TokenIssuer};
use crate::domain::entity::identity::Identity;
use crate::domain::repository::UserRepository;
use crate::error::AuthError;
use crate::presentation::transport::TokenTransport;

/// Middleware state
pub struct AuthMiddlewareState<U>
where
    U: UserRepository + Send + Sync + 'static,
{
    gate: AuthenticateUseCase<U>,
    transport: Arc<TokenTransport>,
}

impl<U> AuthMiddlewareState<U>
where
    U: UserRepository + Send + Sync + 'static,
{
    pub fn new(repo: U, config: &AuthConfig) -> Self {
        Self {
            gate: AuthenticateUseCase::new(Arc::new(repo), Arc::new(TokenIssuer::new(config))),
            transport: Arc::new(TokenTransport::new(config)),
        }
    }
}

impl<U> Clone for AuthMiddlewareState<U>
where
    U: UserRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            gate: self.gate.clone(),
            transport: self.transport.clone(),
        }
    }
}

/// Middleware that requires a valid session
///
/// Use with `axum::middleware::from_fn_with_state`. On success the resolved
/// [`Identity`] is stored in the request extensions.
pub async fn require_session<U>(
    State(state): State<AuthMiddlewareState<U>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError>
where
    U: UserRepository + Send + Sync + 'static,
{
    let token = state.transport.extract(req.headers());
    let identity = state.gate.execute(token.as_deref()).await?;

    tracing::debug!(user_id = %identity.user_id, "Session accepted");

    req.extensions_mut().insert(identity);
    Ok(next.run(req).await)
}

/// Identity resolved by [`require_session`]
///
/// Rejects with 401 on routes the middleware does not cover.
#[derive(Debug, Clone)]
pub struct CurrentIdentity(pub Identity);

impl<S> FromRequestParts<S> for CurrentIdentity
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(CurrentIdentity)
            .ok_or(AuthError::MissingToken)
    }
}
