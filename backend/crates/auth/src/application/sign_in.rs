//! Sign In Use Case
//!
//! Verifies an email/password pair and issues a session token. Both HTTP
//! adapters (JSON body and query string) converge here.

use std::sync::Arc;

use chrono::Utc;
use platform::password::{self, ClearTextPassword};

use crate::application::token_issuer::TokenIssuer;
use crate::domain::entity::{credential::Credential, session_token::SessionToken};
use crate::domain::repository::{CredentialRepository, UserRepository};
use crate::domain::value_object::{UserId, email::Email};
use crate::error::{AuthError, AuthResult};

/// Salt for the derivation run on lookup misses
const DUMMY_SALT: [u8; password::SALT_LEN] = [0x5a; password::SALT_LEN];

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for SignInInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignInInput")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    /// Signed session token for the cookie
    pub token: SessionToken,
    pub subject_id: UserId,
}

/// Sign in use case
pub struct SignInUseCase<U, C>
where
    U: UserRepository,
    C: CredentialRepository,
{
    user_repo: Arc<U>,
    credential_repo: Arc<C>,
    issuer: Arc<TokenIssuer>,
}

impl<U, C> SignInUseCase<U, C>
where
    U: UserRepository,
    C: CredentialRepository,
{
    pub fn new(user_repo: Arc<U>, credential_repo: Arc<C>, issuer: Arc<TokenIssuer>) -> Self {
        Self {
            user_repo,
            credential_repo,
            issuer,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let password = ClearTextPassword::new(input.password);

        // A malformed email cannot match any stored user
        let Ok(email) = Email::new(input.email) else {
            return Err(AuthError::InvalidCredentials);
        };

        let Some(user) = self.user_repo.find_by_email(&email).await? else {
            burn_derivation(password).await;
            return Err(AuthError::InvalidCredentials);
        };

        let Some(credential) = self
            .credential_repo
            .find_by_user_id(&user.user_id)
            .await?
        else {
            tracing::warn!(user_id = %user.user_id, "User has no stored credential");
            burn_derivation(password).await;
            return Err(AuthError::InvalidCredentials);
        };

        if !verify_blocking(credential, password).await? {
            tracing::warn!(user_id = %user.user_id, "Password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.issuer.issue(user.user_id, Utc::now())?;

        tracing::info!(
            user_id = %user.user_id,
            expires_at_ms = token.claims().expires_at_ms,
            "User signed in"
        );

        Ok(SignInOutput {
            token,
            subject_id: user.user_id,
        })
    }
}

/// Run Argon2 off the async workers
async fn verify_blocking(credential: Credential, password: ClearTextPassword) -> AuthResult<bool> {
    tokio::task::spawn_blocking(move || credential.verify(&password))
        .await
        .map_err(|e| AuthError::Internal(format!("Password verification task failed: {e}")))
}

/// Same work as a real verification, so misses and mismatches take equally long
async fn burn_derivation(password: ClearTextPassword) {
    let _ = tokio::task::spawn_blocking(move || password::salted_hash(&password, &DUMMY_SALT)).await;
}
