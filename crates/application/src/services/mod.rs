//! Application services - Use case implementations

mod city_service;
mod health_service;
mod weather_service;

pub use city_service::CityService;
pub use health_service::{HealthReport, HealthService, ServiceHealth};
pub use weather_service::WeatherService;
