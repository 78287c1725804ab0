//! Application layer - Use cases and orchestration
//!
//! Contains input validation, port definitions and the city and weather
//! services. Services depend only on ports and return typed errors; mapping
//! to a transport is left to the presentation layer.

pub mod error;
pub mod ports;
pub mod services;
pub mod validation;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
pub use validation::{CreateCityInput, validate_city_id, validate_city_name};
