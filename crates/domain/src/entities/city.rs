//! Registered city entity

use crate::value_objects::{CityName, GeoLocation};
use serde::{Deserialize, Serialize};

/// A city registered for periodic forecast refresh
///
/// Identified by its name. Immutable once created; there is no update or
/// delete operation, a registered city lives for the process lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    name: CityName,
    location: GeoLocation,
}

impl City {
    /// Create a new city
    #[must_use]
    pub const fn new(name: CityName, location: GeoLocation) -> Self {
        Self { name, location }
    }

    /// Get the city name
    #[must_use]
    pub const fn name(&self) -> &CityName {
        &self.name
    }

    /// Get the city location
    #[must_use]
    pub const fn location(&self) -> &GeoLocation {
        &self.location
    }
}
