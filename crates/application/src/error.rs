//! Application-level errors

use domain::{CityId, DomainError, ErrorKind};
use thiserror::Error;

/// Errors that can occur in the application layer
///
/// Dependency variants carry the underlying failure text for logging only;
/// transport adapters must not echo it back to clients.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error (input validation, malformed payloads)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A city with this name already exists
    #[error("City already exists: {0}")]
    DuplicateCity(String),

    /// No city with this identifier
    #[error("City not found: {0}")]
    CityNotFound(CityId),

    /// Reading from the store failed
    #[error("Store read failed: {0}")]
    StoreRead(String),

    /// Writing to the store failed
    #[error("Store write failed: {0}")]
    StoreWrite(String),

    /// Weather provider returned nothing usable
    #[error("Weather data unavailable: {0}")]
    WeatherUnavailable(String),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Classify this error
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(e) => e.kind(),
            Self::DuplicateCity(_) => ErrorKind::Conflict,
            Self::CityNotFound(_) => ErrorKind::NotFound,
            Self::StoreRead(_)
            | Self::StoreWrite(_)
            | Self::WeatherUnavailable(_)
            | Self::ExternalService(_)
            | Self::Configuration(_)
            | Self::Internal(_) => ErrorKind::Dependency,
        }
    }

    /// Whether the caller caused this error
    pub const fn is_client_error(&self) -> bool {
        !matches!(self.kind(), ErrorKind::Dependency)
    }
}
