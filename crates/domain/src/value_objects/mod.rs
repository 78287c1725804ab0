//! Value Objects - Immutable, identity-less domain primitives

mod city_id;
mod city_name;

pub use city_id::CityId;
pub use city_name::CityName;
