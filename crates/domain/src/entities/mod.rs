//! Entities - Domain objects with identity

mod city;
mod weather_report;

pub use city::City;
pub use weather_report::{CITY_NAME_KEY, WeatherReport};
