//! Route definitions and middleware stack

use axum::{
    Router,
    http::{HeaderValue, Method},
    middleware::from_fn,
    routing::{get, post},
};
use infrastructure::ServerConfig;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tracing::warn;

use crate::{handlers, middleware::propagate_request_id, openapi, state::AppState};

/// Create the router with all API routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .route("/api/cities", post(handlers::cities::create_city))
        .route(
            "/api/cities/{city_id}/weather",
            get(handlers::weather::get_city_weather),
        )
        .with_state(state)
}

/// Create the complete application: API routes, documentation routes and
/// the middleware stack
pub fn create_app(state: AppState, config: &ServerConfig) -> Router {
    create_router(state)
        .merge(openapi::create_openapi_routes())
        .layer(RequestBodyLimitLayer::new(config.max_body_size_bytes))
        .layer(cors_layer(&config.allowed_origins))
        .layer(TraceLayer::new_for_http())
        .layer(from_fn(propagate_request_id))
}

/// Permissive CORS when no origins are configured, otherwise an allow-list
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| {
            origin
                .parse::<HeaderValue>()
                .inspect_err(|_| warn!(origin = %origin, "Ignoring invalid CORS origin"))
                .ok()
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}
