//! Session Gate
//!
//! Single entry point for account creation, sign-in, session lookup and
//! sign-out. Holds no mutable state; clone it freely.
//!
//! ```text
//! Anonymous --register / authenticate--> Authenticated --end_session--> Anonymous
//! ```

use std::sync::Arc;

use crate::application::check_session::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::application::session_token::IssuedSession;
use crate::application::sign_in::{SignInInput, SignInUseCase};
use crate::application::sign_out::SignOutUseCase;
use crate::application::sign_up::{SignUpInput, SignUpUseCase};
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;

pub struct SessionGate<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> Clone for SessionGate<R>
where
    R: UserRepository,
{
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            config: Arc::clone(&self.config),
        }
    }
}

impl<R> SessionGate<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Create an account and start a session for it
    pub async fn register(
        &self,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> AuthResult<IssuedSession> {
        SignUpUseCase::new(self.repo.clone(), self.config.clone())
            .execute(SignUpInput {
                name: name.into(),
                email: email.into(),
                password: password.into(),
            })
            .await
    }

    /// Check credentials and start a session
    pub async fn authenticate(
        &self,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> AuthResult<IssuedSession> {
        SignInUseCase::new(self.repo.clone(), self.config.clone())
            .execute(SignInInput {
                email: email.into(),
                password: password.into(),
            })
            .await
    }

    /// Resolve a session token; `Ok(None)` means anonymous
    pub async fn resolve_session(&self, token: Option<&str>) -> AuthResult<Option<User>> {
        CheckSessionUseCase::new(self.repo.clone(), self.config.clone())
            .execute(token)
            .await
    }

    /// End a session; never fails
    pub fn end_session(&self, token: Option<&str>) {
        SignOutUseCase::new(self.config.clone()).execute(token);
    }
}
