//! Sign In Use Case
//!
//! Authenticates a user by email and password and starts a session.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::session_token::IssuedSession;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in use case
pub struct SignInUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> SignInUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    /// Fails with `NoSuchUser` when no account has the email and with
    /// `CredentialMismatch` when the password is wrong. The two are never
    /// conflated here.
    pub async fn execute(&self, input: SignInInput) -> AuthResult<IssuedSession> {
        if input.email.trim().is_empty() {
            return Err(AuthError::Validation("Email is required".to_string()));
        }

        // An address that fails validation can never have been registered
        let email = Email::new(&input.email).map_err(|_| AuthError::NoSuchUser)?;

        let user = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::NoSuchUser)?;

        // No policy on verify: only the stored hash decides
        let raw_password = ClearTextPassword::for_verification(input.password);
        let stored = user.password_hash.clone();
        let pepper = self.config.password_pepper.clone();
        let matches = tokio::task::spawn_blocking(move || {
            stored.verify(&raw_password, pepper.as_deref())
        })
        .await?;

        if !matches {
            return Err(AuthError::CredentialMismatch);
        }

        tracing::info!(user_id = %user.id, "User signed in");

        Ok(IssuedSession::start(user.id, &self.config))
    }
}
