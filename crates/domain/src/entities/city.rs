//! City entity

use serde::{Deserialize, Serialize};

use crate::value_objects::{CityId, CityName};

/// A persisted, uniquely named city
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    /// Identifier assigned by the store on creation
    pub id: CityId,
    /// Unique name
    pub name: CityName,
}

impl City {
    /// Create a city from stored parts
    pub const fn new(id: CityId, name: CityName) -> Self {
        Self { id, name }
    }
}
