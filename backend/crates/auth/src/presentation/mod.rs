//! Presentation Layer
//!
//! HTTP handlers, DTOs, cookie transport, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod transport;

pub use handlers::AuthAppState;
pub use middleware::{AuthMiddlewareState, CurrentIdentity, require_session};
pub use router::{auth_router, auth_router_generic};
pub use transport::TokenTransport;
