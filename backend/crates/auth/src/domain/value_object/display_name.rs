//! Display Name Value Object
//!
//! Free-form name shown back to the signed-in user. Not unique and not a
//! login identifier.
//!
//! ## Invariants
//! - NFKC normalized and trimmed
//! - 1..=100 characters
//! - No control characters

use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

/// Maximum length for display name (in characters)
pub const DISPLAY_NAME_MAX_LENGTH: usize = 100;

/// Display name validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisplayNameError {
    #[error("Name cannot be empty")]
    Empty,

    #[error("Name must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Name contains invalid control characters")]
    InvalidCharacter,
}

/// Display name value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(try_from = "String", into = "String")]
pub struct DisplayName(String);

impl DisplayName {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, DisplayNameError> {
        let normalized: String = raw.as_ref().nfkc().collect();
        let name = normalized.trim();

        if name.is_empty() {
            return Err(DisplayNameError::Empty);
        }

        let actual = name.chars().count();
        if actual > DISPLAY_NAME_MAX_LENGTH {
            return Err(DisplayNameError::TooLong {
                max: DISPLAY_NAME_MAX_LENGTH,
                actual,
            });
        }

        if name.chars().any(char::is_control) {
            return Err(DisplayNameError::InvalidCharacter);
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DisplayName {
    type Error = DisplayNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        DisplayName::new(value)
    }
}

impl From<DisplayName> for String {
    fn from(name: DisplayName) -> Self {
        name.0
    }
}
