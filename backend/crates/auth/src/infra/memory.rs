//! In-Memory Repository Implementations
//!
//! Backs tests and local runs without a database. Not persistent.

use std::collections::HashMap;
use std::sync::Arc;

use platform::password::ClearTextPassword;
use tokio::sync::RwLock;

use crate::domain::entity::{credential::Credential, user::User};
use crate::domain::repository::{CredentialRepository, UserRepository};
use crate::domain::value_object::{UserId, email::Email};
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct Tables {
    users: HashMap<UserId, User>,
    credentials: HashMap<UserId, Credential>,
}

/// In-memory auth repository; clones share the same tables
#[derive(Clone, Default)]
pub struct MemoryAuthRepository {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user with a password, returning the new user's id
    pub async fn seed_user(&self, email: &str, password: &str) -> AuthResult<UserId> {
        let email =
            Email::new(email).map_err(|e| AuthError::InvalidRequest(e.message().to_string()))?;
        let user = User::new(email);
        let credential = Credential::derive(user.user_id, &ClearTextPassword::new(password))?;

        UserRepository::create(self, &user).await?;
        CredentialRepository::create(self, &credential).await?;

        Ok(user.user_id)
    }
}

impl UserRepository for MemoryAuthRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut tables = self.tables.write().await;

        if tables.users.values().any(|u| u.email == user.email) {
            return Err(AuthError::InvalidRequest(format!(
                "Email already registered: {}",
                user.email
            )));
        }

        tables.users.insert(user.user_id, user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self.tables.read().await.users.get(user_id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        Ok(self
            .tables
            .read()
            .await
            .users
            .values()
            .find(|u| &u.email == email)
            .cloned())
    }
}

impl CredentialRepository for MemoryAuthRepository {
    async fn create(&self, credential: &Credential) -> AuthResult<()> {
        let mut tables = self.tables.write().await;

        if !tables.users.contains_key(&credential.user_id) {
            return Err(AuthError::InvalidRequest(format!(
                "Unknown user: {}",
                credential.user_id
            )));
        }

        tables
            .credentials
            .insert(credential.user_id, credential.clone());
        Ok(())
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> AuthResult<Option<Credential>> {
        Ok(self.tables.read().await.credentials.get(user_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_and_lookup() {
        let repo = MemoryAuthRepository::new();
        let user_id = repo.seed_user("A@x.com", "secret").await.unwrap();

        let email = Email::new("a@x.com").unwrap();
        let user = repo.find_by_email(&email).await.unwrap().unwrap();
        assert_eq!(user.user_id, user_id);
        assert_eq!(repo.find_by_id(&user_id).await.unwrap(), Some(user));

        let credential = repo.find_by_user_id(&user_id).await.unwrap().unwrap();
        assert!(credential.verify(&ClearTextPassword::new("secret")));
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let repo = MemoryAuthRepository::new();
        repo.seed_user("a@x.com", "one").await.unwrap();
        assert!(repo.seed_user("a@x.com", "two").await.is_err());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let repo = MemoryAuthRepository::new();
        let user_id = repo.clone().seed_user("a@x.com", "secret").await.unwrap();
        assert!(repo.find_by_id(&user_id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_credential_needs_user() {
        let repo = MemoryAuthRepository::new();
        let credential =
            Credential::derive(UserId::new(), &ClearTextPassword::new("secret")).unwrap();
        assert!(CredentialRepository::create(&repo, &credential).await.is_err());
    }
}
