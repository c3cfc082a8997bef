//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases and the [`SessionGate`] that composes them
//! - `infra/` - Credential store implementations
//! - `presentation/` - HTTP handlers, DTOs, router, gate middleware
//!
//! ## Features
//! - Account creation with display name + email + password
//! - Sign-in by email and password
//! - Stateless signed session tokens carried in a cookie
//! - Route gating for anything that needs a signed-in user
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, verified on the blocking pool
//! - Session tokens are HMAC-SHA256 signed and carry their own expiry
//! - Sign-out clears the cookie; issued tokens stay valid until they expire

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::session_gate::SessionGate;
pub use error::{AuthError, AuthResult};
pub use infra::memory::MemoryUserRepository;
pub use presentation::middleware::{CurrentUser, require_session};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
