//! City weather handler

use axum::{
    Json,
    extract::{Path, State},
};
use domain::WeatherReport;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Get the current weather for a registered city
///
/// The body is the provider's JSON object with a `cityName` member added.
#[utoipa::path(
    get,
    path = "/api/cities/{city_id}/weather",
    tag = "weather",
    params(
        ("city_id" = String, Path, description = "City identifier", example = "1")
    ),
    responses(
        (status = 200, description = "Provider payload with cityName", content_type = "application/json"),
        (status = 400, description = "Invalid city ID", body = crate::error::ErrorResponse),
        (status = 404, description = "City not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Store or provider failure", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_city_weather(
    State(state): State<AppState>,
    Path(city_id): Path<String>,
) -> Result<Json<WeatherReport>, ApiError> {
    state
        .weather_service
        .get_weather(&city_id)
        .await
        .map(Json)
        .map_err(ApiError::weather)
}
