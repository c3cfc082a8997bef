//! User Entity
//!
//! An account record as held by the credential store.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    display_name::DisplayName, email::Email, user_id::UserId, user_password::UserPassword,
};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Store-assigned identifier, immutable
    pub id: UserId,
    /// Display name set at creation
    pub name: DisplayName,
    /// Unique lookup key (lowercase)
    pub email: Email,
    /// Argon2id hash of the password
    pub password_hash: UserPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

/// A user that has not been stored yet (no id)
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: DisplayName,
    pub email: Email,
    pub password_hash: UserPassword,
}

impl NewUser {
    pub fn new(name: DisplayName, email: Email, password_hash: UserPassword) -> Self {
        Self {
            name,
            email,
            password_hash,
        }
    }

    /// Attach the id the store assigned
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            created_at: Utc::now(),
        }
    }
}
