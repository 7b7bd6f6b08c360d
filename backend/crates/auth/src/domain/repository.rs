//! Repository Traits
//!
//! Interfaces to the user store. Implementations are in the infra layer.

use crate::domain::entity::{credential::Credential, user::User};
use crate::domain::value_object::{UserId, email::Email};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by (normalized) email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;
}

/// Credential repository trait
#[trait_variant::make(CredentialRepository: Send)]
pub trait LocalCredentialRepository {
    /// Store a credential for an existing user
    async fn create(&self, credential: &Credential) -> AuthResult<()>;

    /// Find the credential of a user
    async fn find_by_user_id(&self, user_id: &UserId) -> AuthResult<Option<Credential>>;
}
