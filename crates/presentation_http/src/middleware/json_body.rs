//! JSON request body extraction
//!
//! Provides a `JsonBody` extractor that accepts a missing body, rejects
//! anything but a JSON object and reports every decoding problem with the
//! standard `{"error": ...}` body.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::{ApiError, messages};

/// A JSON extractor for object-shaped request bodies
///
/// - an empty or whitespace-only body yields `T::default()`
/// - a body that is not a JSON object is rejected
/// - an object that does not fit `T` is rejected
///
/// The `Content-Type` header is not inspected.
///
/// # Example
///
/// ```ignore
/// #[derive(Default, Deserialize)]
/// struct Rename {
///     #[serde(default)]
///     name: Option<String>,
/// }
///
/// async fn handler(JsonBody(req): JsonBody<Rename>) {
///     // req.name is None when the field was absent
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                ApiError::PayloadTooLarge
            } else {
                debug!(error = %rejection, "Failed to read request body");
                ApiError::BadRequest(messages::INVALID_BODY)
            }
        })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        let value: Value = serde_json::from_slice(&bytes).map_err(|e| {
            debug!(error = %e, "Request body is not valid JSON");
            ApiError::BadRequest(messages::INVALID_BODY)
        })?;

        if !value.is_object() {
            debug!("Request body is not a JSON object");
            return Err(ApiError::BadRequest(messages::INVALID_BODY));
        }

        serde_json::from_value(value).map(Self).map_err(|e| {
            debug!(error = %e, "Request body does not match the expected shape");
            ApiError::BadRequest(messages::INVALID_BODY)
        })
    }
}
