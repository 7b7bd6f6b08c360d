//! Project Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Project entity, value objects, repository trait
//! - `application/` - List, get, create, delete use cases
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Access Model
//! - Every route requires a session resolved by `auth::require_session`
//! - Projects are scoped to their owner; someone else's project is a 404

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{ProjectError, ProjectResult};
pub use infra::{memory::MemoryProjectRepository, postgres::PgProjectRepository};
pub use presentation::router::{project_router, project_router_generic};
