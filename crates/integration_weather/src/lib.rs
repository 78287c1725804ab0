//! Weather provider integration
//!
//! Thin HTTP client for the external weather provider. The provider's
//! document format is not interpreted here; callers receive the raw body.

pub mod client;

pub use client::{HttpWeatherClient, WeatherClient, WeatherConfig, WeatherError};
