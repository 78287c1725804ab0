//! Domain-level errors

use thiserror::Error;

/// Broad classification of a failure, independent of transport
///
/// Client-caused kinds (`Validation`, `Conflict`, `NotFound`) have no side
/// effects; `Dependency` covers everything caused by the store or the
/// weather provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or out-of-range input
    Validation,
    /// Input collides with existing state
    Conflict,
    /// Referenced entity does not exist
    NotFound,
    /// Store or external service failure
    Dependency,
}

/// Errors that can occur in the domain layer
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// A required input field is absent
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// City name present but zero-length
    #[error("City name cannot be empty")]
    EmptyCityName,

    /// City name exceeds the maximum length
    #[error("City name is too long: {actual} characters (max {max})")]
    CityNameTooLong { max: usize, actual: usize },

    /// City identifier does not parse as an integer
    #[error("Invalid city ID: {0:?}")]
    InvalidCityId(String),

    /// Weather payload is empty, not JSON, or not a JSON object
    #[error("Malformed weather payload: {0}")]
    MalformedWeatherPayload(String),
}

impl DomainError {
    /// Classify this error
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingField(_)
            | Self::EmptyCityName
            | Self::CityNameTooLong { .. }
            | Self::InvalidCityId(_) => ErrorKind::Validation,
            Self::MalformedWeatherPayload(_) => ErrorKind::Dependency,
        }
    }
}
