//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};

use crate::application::config::AuthConfig;
use crate::domain::repository::{CredentialRepository, UserRepository};
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgAuthRepository, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + CredentialRepository + Send + Sync + 'static,
{
    let state = AuthAppState::new(repo, config);

    Router::new()
        .route(
            "/token",
            post(handlers::login::<R>).delete(handlers::logout::<R>),
        )
        .route("/session", get(handlers::session_status::<R>))
        .with_state(state)
}
