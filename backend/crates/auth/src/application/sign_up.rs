//! Sign Up Use Case
//!
//! Creates a new user account and starts a session for it.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::session_token::IssuedSession;
use crate::domain::entity::user::NewUser;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    display_name::DisplayName, email::Email, user_password::UserPassword,
};
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Sign up use case
pub struct SignUpUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> SignUpUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<IssuedSession> {
        // Validate everything before hashing or touching the store
        let name =
            DisplayName::new(&input.name).map_err(|e| AuthError::Validation(e.to_string()))?;
        let email = Email::new(&input.email).map_err(|e| AuthError::Validation(e.to_string()))?;
        let raw_password = ClearTextPassword::new(input.password, &self.config.password_policy)?;

        // Skip the expensive hash when the email is obviously taken.
        // The store still enforces uniqueness on insert.
        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::DuplicateEmail);
        }

        let cost = self.config.hash_cost;
        let pepper = self.config.password_pepper.clone();
        let password_hash = tokio::task::spawn_blocking(move || {
            UserPassword::hash(&raw_password, &cost, pepper.as_deref())
        })
        .await??;

        let user = self
            .repo
            .insert(NewUser::new(name, email, password_hash))
            .await?;

        tracing::info!(user_id = %user.id, "User signed up");

        Ok(IssuedSession::start(user.id, &self.config))
    }
}
