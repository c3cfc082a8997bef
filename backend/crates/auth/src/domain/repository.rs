//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::{NewUser, User};
use crate::domain::value_object::{email::Email, user_id::UserId};
use crate::error::AuthResult;

/// Credential store
///
/// Implementations map connectivity failures to
/// [`AuthError::StorageUnavailable`](crate::error::AuthError::StorageUnavailable).
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Store a new user and assign its id
    ///
    /// Fails with `DuplicateEmail` if the email is taken. The uniqueness
    /// check and the insert must be atomic.
    async fn insert(&self, user: NewUser) -> AuthResult<User>;

    /// Find user by (normalized) email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>>;
}
