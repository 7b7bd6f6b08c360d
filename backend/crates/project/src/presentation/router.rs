//! Project Router

use auth::{AuthMiddlewareState, PgAuthRepository, require_session};
use auth::domain::repository::UserRepository;
use axum::{Router, middleware, routing::get};
use std::sync::Arc;

use crate::domain::repository::ProjectRepository;
use crate::infra::postgres::PgProjectRepository;
use crate::presentation::handlers::{self, ProjectAppState};

/// Create the Project router with PostgreSQL repositories
pub fn project_router(
    repo: PgProjectRepository,
    session: AuthMiddlewareState<PgAuthRepository>,
) -> Router {
    project_router_generic(repo, session)
}

/// Create a generic Project router for any repository implementation
///
/// All routes sit behind `require_session`.
pub fn project_router_generic<R, U>(repo: R, session: AuthMiddlewareState<U>) -> Router
where
    R: ProjectRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    let state = ProjectAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/proj",
            get(handlers::list_projects::<R>).post(handlers::create_project::<R>),
        )
        .route(
            "/proj/{id}",
            get(handlers::get_project::<R>).delete(handlers::delete_project::<R>),
        )
        .route_layer(middleware::from_fn_with_state(session, require_session::<U>))
        .with_state(state)
}
