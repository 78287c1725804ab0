//! OpenAPI documentation
//!
//! Serves the generated document with Swagger UI and ReDoc.

// utoipa derive output
#![allow(clippy::needless_for_each)]

use axum::Router;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::{error::ErrorResponse, handlers};

/// Path of the JSON document
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// OpenAPI document for the city weather API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "City Weather API",
        description = "Register cities by name and look up their current weather"
    ),
    servers((url = "/", description = "Local server")),
    tags(
        (name = "cities", description = "City registration"),
        (name = "weather", description = "Per-city weather lookups"),
        (name = "health", description = "Liveness and readiness")
    ),
    paths(
        handlers::cities::create_city,
        handlers::weather::get_city_weather,
        handlers::health::health_check,
        handlers::health::readiness_check,
    ),
    components(schemas(
        handlers::cities::CreateCityRequest,
        handlers::cities::CityResponse,
        handlers::health::HealthResponse,
        handlers::health::ReadinessResponse,
        handlers::health::DependencyStatus,
        ErrorResponse,
    ))
)]
pub struct ApiDoc;

/// Documentation routes: `/swagger-ui`, `/redoc` and the JSON document
pub fn create_openapi_routes() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
}
