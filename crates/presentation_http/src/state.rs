//! Application state shared across handlers

use std::sync::Arc;

use application::{CityService, HealthService, WeatherService};

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// City registration
    pub city_service: Arc<CityService>,
    /// Per-city weather lookups
    pub weather_service: Arc<WeatherService>,
    /// Readiness checks
    pub health_service: Arc<HealthService>,
}
