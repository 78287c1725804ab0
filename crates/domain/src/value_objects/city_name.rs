//! City name value object
//!
//! A city name is kept exactly as submitted: no trimming, no case folding.
//! Uniqueness across cities is case-sensitive and enforced by the store.
//!
//! # Examples
//!
//! ```
//! use domain::CityName;
//!
//! let name = CityName::new("New York").unwrap();
//! assert_eq!(name.as_str(), "New York");
//!
//! assert!(CityName::new("").is_err());
//! assert!(CityName::new("x".repeat(256)).is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::DomainError;

/// A validated city name (1 to 255 characters)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(try_from = "String", into = "String")]
pub struct CityName {
    #[validate(length(max = 255))]
    value: String,
}

impl CityName {
    /// Maximum length in characters
    pub const MAX_LEN: usize = 255;

    /// Create a city name, checking its length
    ///
    /// Length is counted in Unicode scalar values, so `"São Paulo"` is nine
    /// characters even though it is ten bytes. This is intentionally not a
    /// UTF-16 count: an emoji outside the BMP counts as one, not two.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyCityName`] for `""` and
    /// [`DomainError::CityNameTooLong`] past [`Self::MAX_LEN`].
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let value = name.into();
        if value.is_empty() {
            return Err(DomainError::EmptyCityName);
        }

        let candidate = Self { value };
        candidate
            .validate()
            .map_err(|_| DomainError::CityNameTooLong {
                max: Self::MAX_LEN,
                actual: candidate.value.chars().count(),
            })?;

        Ok(candidate)
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Consume and return the inner string
    pub fn into_inner(self) -> String {
        self.value
    }
}

impl fmt::Display for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl TryFrom<String> for CityName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for CityName {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CityName> for String {
    fn from(name: CityName) -> Self {
        name.value
    }
}

impl AsRef<str> for CityName {
    fn as_ref(&self) -> &str {
        &self.value
    }
}
