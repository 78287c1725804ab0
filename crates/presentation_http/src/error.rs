//! API error handling
//!
//! Every error response has the body `{"error": "<message>"}`. Messages for
//! server-side failures are fixed strings; the underlying cause is logged
//! and never sent to the client.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};
use utoipa::ToSchema;

/// Client-facing error messages
pub mod messages {
    pub const NAME_REQUIRED: &str = "City name is required";
    pub const NAME_EMPTY: &str = "City name cannot be empty";
    pub const NAME_TOO_LONG: &str = "City name is too long";
    pub const CITY_EXISTS: &str = "City already exists";
    pub const CREATE_READ_FAILED: &str = "Database Error Occured";
    pub const CREATE_WRITE_FAILED: &str = "Failed to create city";
    pub const INVALID_CITY_ID: &str = "Invalid city ID";
    pub const CITY_NOT_FOUND: &str = "City not found";
    pub const WEATHER_READ_FAILED: &str = "Failed to fetch weather data";
    pub const WEATHER_UNAVAILABLE: &str = "Weather data is not available";
    pub const INVALID_BODY: &str = "Invalid request body";
    pub const BODY_TOO_LARGE: &str = "Request body too large";
    pub const INTERNAL: &str = "Internal server error";
}

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(&'static str),

    #[error("Not found: {0}")]
    NotFound(&'static str),

    #[error("Payload too large")]
    PayloadTooLarge,

    /// Server-side failure; `detail` is logged only
    #[error("Internal error: {message}: {detail}")]
    Internal {
        message: &'static str,
        detail: String,
    },
}

/// Error response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    #[schema(example = "City not found")]
    pub error: String,
}

impl ApiError {
    /// Map a failure of the create-city flow
    pub fn create_city(err: ApplicationError) -> Self {
        Self::from_application(err, messages::CREATE_READ_FAILED)
    }

    /// Map a failure of the weather flow
    pub fn weather(err: ApplicationError) -> Self {
        Self::from_application(err, messages::WEATHER_READ_FAILED)
    }

    /// Shared mapping; store read failures carry a per-operation message
    fn from_application(err: ApplicationError, store_read_message: &'static str) -> Self {
        match err {
            ApplicationError::Domain(e) => Self::from(e),
            ApplicationError::DuplicateCity(_) => Self::BadRequest(messages::CITY_EXISTS),
            ApplicationError::CityNotFound(_) => Self::NotFound(messages::CITY_NOT_FOUND),
            ApplicationError::StoreRead(detail) => Self::Internal {
                message: store_read_message,
                detail,
            },
            ApplicationError::StoreWrite(detail) => Self::Internal {
                message: messages::CREATE_WRITE_FAILED,
                detail,
            },
            ApplicationError::WeatherUnavailable(detail) => Self::Internal {
                message: messages::WEATHER_UNAVAILABLE,
                detail,
            },
            other @ (ApplicationError::ExternalService(_)
            | ApplicationError::Configuration(_)
            | ApplicationError::Internal(_)) => Self::Internal {
                message: messages::INTERNAL,
                detail: other.to_string(),
            },
        }
    }

    /// HTTP status for this error
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to the client
    pub const fn message(&self) -> &'static str {
        match self {
            Self::BadRequest(msg) | Self::NotFound(msg) => *msg,
            Self::PayloadTooLarge => messages::BODY_TOO_LARGE,
            Self::Internal { message, .. } => *message,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::MissingField(_) => Self::BadRequest(messages::NAME_REQUIRED),
            DomainError::EmptyCityName => Self::BadRequest(messages::NAME_EMPTY),
            DomainError::CityNameTooLong { .. } => Self::BadRequest(messages::NAME_TOO_LONG),
            DomainError::InvalidCityId(_) => Self::BadRequest(messages::INVALID_CITY_ID),
            DomainError::MalformedWeatherPayload(detail) => Self::Internal {
                message: messages::WEATHER_UNAVAILABLE,
                detail,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Internal { message, detail } => {
                error!(status = status.as_u16(), reason = *message, detail = %detail, "Request failed");
            },
            other => {
                warn!(status = status.as_u16(), reason = other.message(), "Request rejected");
            },
        }

        let body = ErrorResponse {
            error: self.message().to_string(),
        };

        (status, Json(body)).into_response()
    }
}
