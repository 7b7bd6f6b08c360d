//! Domain Layer
//!
//! Entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{
    credential::Credential, identity::Identity, session_token::SessionClaims,
    session_token::SessionToken, user::User,
};
pub use repository::{CredentialRepository, UserRepository};
