//! City registration handler

use application::CreateCityInput;
use axum::{Json, extract::State, http::StatusCode};
use domain::City;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;

use crate::{error::ApiError, middleware::JsonBody, state::AppState};

/// Create city request
///
/// `name` is optional at the type level so that a missing field can be
/// reported separately from an empty one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateCityRequest {
    /// City name, 1 to 255 characters
    #[serde(default)]
    #[schema(example = "Miami", max_length = 255)]
    pub name: Option<String>,
}

impl From<CreateCityRequest> for CreateCityInput {
    fn from(req: CreateCityRequest) -> Self {
        Self { name: req.name }
    }
}

/// A registered city
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CityResponse {
    /// Store-assigned identifier
    #[schema(example = 1)]
    pub id: i64,
    /// City name as submitted
    #[schema(example = "Miami")]
    pub name: String,
}

impl From<City> for CityResponse {
    fn from(city: City) -> Self {
        Self {
            id: city.id.as_i64(),
            name: city.name.into_inner(),
        }
    }
}

/// Register a new city
#[utoipa::path(
    post,
    path = "/api/cities",
    tag = "cities",
    request_body = CreateCityRequest,
    responses(
        (status = 201, description = "City created", body = CityResponse),
        (status = 400, description = "Invalid or duplicate name", body = crate::error::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state, request))]
pub async fn create_city(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateCityRequest>,
) -> Result<(StatusCode, Json<CityResponse>), ApiError> {
    let city = state
        .city_service
        .create_city(&request.into())
        .await
        .map_err(ApiError::create_city)?;

    info!(city_id = %city.id, "City registered");

    Ok((StatusCode::CREATED, Json(city.into())))
}
