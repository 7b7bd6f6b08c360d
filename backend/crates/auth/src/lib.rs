//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Token issuer, sign-in and Session Gate use cases
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, cookie transport, router, middleware
//!
//! ## Features
//! - Login with email + password (JSON body or query string)
//! - Stateless signed session tokens carried in an HttpOnly cookie
//! - Freshness window embedded in every token
//! - Session Gate middleware for protected routes
//!
//! ## Security Model
//! - Passwords derived with Argon2id over a per-user random salt
//! - Tokens signed with HMAC-SHA256, verified in constant time
//! - Unknown email and wrong password are indistinguishable to clients
//! - Missing, malformed and expired tokens share one 401 response
//! - No server-side session state: logout only clears the cookie

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use domain::entity::identity::Identity;
pub use domain::value_object::freshness::FreshnessFactor;
pub use error::{AuthError, AuthResult};
pub use infra::{memory::MemoryAuthRepository, postgres::PgAuthRepository};
pub use presentation::middleware::{AuthMiddlewareState, CurrentIdentity, require_session};
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
