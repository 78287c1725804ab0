//! City identifier value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Store-assigned city identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityId(i64);

impl CityId {
    /// Wrap a raw identifier
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Parse an identifier from a path segment
    ///
    /// Reads a leading integer: whitespace is skipped, an optional sign is
    /// accepted, then digits are consumed up to the first non-digit. Anything
    /// after the digits is ignored.
    ///
    /// ```
    /// use domain::CityId;
    ///
    /// assert_eq!(CityId::parse("42").unwrap().as_i64(), 42);
    /// assert_eq!(CityId::parse("12abc").unwrap().as_i64(), 12);
    /// assert!(CityId::parse("invalid-id").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidCityId`] when no digits lead the input
    /// or the number does not fit in an `i64`.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidCityId(raw.to_string());

        let trimmed = raw.trim_start();
        let unsigned = trimmed
            .strip_prefix(['+', '-'])
            .unwrap_or(trimmed);
        let sign_len = trimmed.len() - unsigned.len();

        let digits = unsigned
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        if digits == 0 {
            return Err(invalid());
        }

        trimmed[..sign_len + digits]
            .parse::<i64>()
            .map(Self)
            .map_err(|_| invalid())
    }

    /// Get the raw value
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for CityId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}
