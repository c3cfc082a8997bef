//! Check Session Use Case
//!
//! Resolves a session token to the user it was issued for.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session_token::{SessionClaims, SessionToken, now_ms};
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;

/// Check session use case
pub struct CheckSessionUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> CheckSessionUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    /// Resolve `token` to a user
    ///
    /// Anything short of a live, correctly signed token for an existing
    /// user is anonymous (`Ok(None)`). Only a store failure is an error.
    pub async fn execute(&self, token: Option<&str>) -> AuthResult<Option<User>> {
        let Some(claims) = token.and_then(|t| self.claims(t)) else {
            return Ok(None);
        };

        let user = self.repo.find_by_id(claims.user_id).await?;
        if user.is_none() {
            tracing::debug!(user_id = %claims.user_id, "Session for unknown user");
        }
        Ok(user)
    }

    /// Verify signature and expiry without touching the store
    pub fn claims(&self, token: &str) -> Option<SessionClaims> {
        SessionToken::verify(token, &self.config.session_secret, now_ms())
    }
}
