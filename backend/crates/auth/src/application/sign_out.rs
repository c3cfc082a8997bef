//! Sign Out Use Case
//!
//! Ends a client's session. Tokens are stateless, so there is nothing to
//! delete server-side; the caller clears the cookie.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session_token::{SessionToken, now_ms};

/// Sign out use case
pub struct SignOutUseCase {
    config: Arc<AuthConfig>,
}

impl SignOutUseCase {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// Idempotent; a missing or invalid token is not an error
    pub fn execute(&self, token: Option<&str>) {
        match token.and_then(|t| SessionToken::verify(t, &self.config.session_secret, now_ms())) {
            Some(claims) => tracing::info!(user_id = %claims.user_id, "User signed out"),
            None => tracing::debug!("Sign out without a live session"),
        }
    }
}
