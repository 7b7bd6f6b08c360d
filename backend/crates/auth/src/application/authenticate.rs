//! Session Gate
//!
//! `NoToken -> TokenPresent -> SignatureValid | SignatureInvalid -> Authenticated | Expired`
//!
//! Resolves the identity behind a session token. Read-only: nothing is
//! written, refreshed, or extended.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::token_issuer::TokenIssuer;
use crate::domain::entity::identity::Identity;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Authenticate use case
pub struct AuthenticateUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    issuer: Arc<TokenIssuer>,
}

impl<U> AuthenticateUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, issuer: Arc<TokenIssuer>) -> Self {
        Self { user_repo, issuer }
    }

    pub async fn execute(&self, token: Option<&str>) -> AuthResult<Identity> {
        self.execute_at(token, Utc::now()).await
    }

    /// Same as [`execute`](Self::execute) against an explicit clock
    pub async fn execute_at(&self, token: Option<&str>, now: DateTime<Utc>) -> AuthResult<Identity> {
        let token = token.ok_or(AuthError::MissingToken)?;
        let claims = self.issuer.verify(token)?;

        if claims.is_expired_at(now) {
            return Err(AuthError::ExpiredToken);
        }

        let user = match self.user_repo.find_by_id(&claims.subject_id).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                tracing::warn!(
                    subject_id = %claims.subject_id,
                    "Valid token for a subject that no longer exists"
                );
                return Err(AuthError::MalformedToken);
            }
            Err(e) => {
                tracing::error!(
                    subject_id = %claims.subject_id,
                    error = %e,
                    "User store failed while resolving session"
                );
                return Err(AuthError::MalformedToken);
            }
        };

        Ok(Identity::resolve(user, &claims))
    }
}

impl<U> Clone for AuthenticateUseCase<U>
where
    U: UserRepository,
{
    fn clone(&self) -> Self {
        Self {
            user_repo: self.user_repo.clone(),
            issuer: self.issuer.clone(),
        }
    }
}
