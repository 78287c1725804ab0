//! Domain layer for the city weather service
//!
//! Contains the city entity, its validated value objects, the weather report
//! merge rule and domain errors. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::{DomainError, ErrorKind};
pub use value_objects::*;
