//! User Password Value Object
//!
//! Domain wrapper over `platform::password`. Only the argon2id PHC string
//! is ever stored; the clear text lives in a [`ClearTextPassword`] that is
//! zeroized on drop.
//!
//! ## Usage
//! ```rust
//! use auth::domain::value_object::user_password::UserPassword;
//! use platform::password::{ClearTextPassword, HashCost, PasswordPolicy};
//!
//! let raw = ClearTextPassword::new("hunter2".to_string(), &PasswordPolicy::default()).unwrap();
//! let stored = UserPassword::hash(&raw, &HashCost::low(), None).unwrap();
//! assert!(stored.verify(&raw, None));
//! ```

use platform::password::{ClearTextPassword, HashCost, HashedPassword, PasswordHashError};
use std::fmt;

/// Stored password hash (argon2id PHC string)
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a clear text password for storage
    pub fn hash(
        raw: &ClearTextPassword,
        cost: &HashCost,
        pepper: Option<&[u8]>,
    ) -> Result<Self, PasswordHashError> {
        raw.hash(cost, pepper).map(Self)
    }

    /// Restore from a stored PHC string
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        HashedPassword::from_phc_string(s).map(Self)
    }

    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Constant-work verification against the stored hash
    pub fn verify(&self, raw: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(raw, pepper)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UserPassword([HASH])")
    }
}
