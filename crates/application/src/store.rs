//! In-memory weather store
//!
//! Explicit store object with a defined lifecycle: constructed once at
//! process start and passed by handle to handlers and the refresh task.
//! Locks are never held across await points; payloads are cloned out.

use std::collections::HashMap;

use domain::entities::City;
use domain::value_objects::CityName;
use parking_lot::RwLock;

use crate::error::ApplicationError;
use crate::ports::Forecast;

/// Insertion-ordered registry of cities
///
/// Supports add (rejecting duplicates) and listing; cities are never
/// updated or removed.
#[derive(Debug, Default)]
pub struct CityRegistry {
    cities: RwLock<Vec<City>>,
}

impl CityRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a city
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::CityExists` if a city with the same name
    /// is already registered.
    pub fn add(&self, city: City) -> Result<(), ApplicationError> {
        let mut cities = self.cities.write();
        if cities.iter().any(|c| c.name() == city.name()) {
            return Err(ApplicationError::CityExists(city.name().to_string()));
        }
        cities.push(city);
        Ok(())
    }

    /// Check whether a city name is registered
    #[must_use]
    pub fn contains(&self, name: &CityName) -> bool {
        self.cities.read().iter().any(|c| c.name() == name)
    }

    /// City names in insertion order
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.cities
            .read()
            .iter()
            .map(|c| c.name().to_string())
            .collect()
    }

    /// Snapshot of all registered cities, in insertion order
    ///
    /// The refresh pass iterates over this snapshot so the registry lock is
    /// released before any outbound call is made.
    #[must_use]
    pub fn snapshot(&self) -> Vec<City> {
        self.cities.read().clone()
    }

    /// Number of registered cities
    #[must_use]
    pub fn len(&self) -> usize {
        self.cities.read().len()
    }

    /// Check if no cities are registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cities.read().is_empty()
    }
}

/// Cache of the most recently fetched forecast per city
///
/// Unconditional overwrite on put; no eviction, TTL, or size bound —
/// entries live for the process lifetime.
#[derive(Debug, Default)]
pub struct ForecastCache {
    entries: RwLock<HashMap<String, Forecast>>,
}

impl ForecastCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cached forecast for a city, if present
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Forecast> {
        self.entries.read().get(name).cloned()
    }

    /// Store a forecast, replacing any previous entry wholesale
    pub fn put(&self, name: impl Into<String>, forecast: Forecast) {
        self.entries.write().insert(name.into(), forecast);
    }

    /// Check whether a city has a cached forecast
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.read().contains_key(name)
    }

    /// Number of cached entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if the cache is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

/// Registry and cache bundled as one store handle
#[derive(Debug, Default)]
pub struct WeatherStore {
    /// Registered cities
    pub registry: CityRegistry,
    /// Cached forecast payloads
    pub cache: ForecastCache,
}

impl WeatherStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
