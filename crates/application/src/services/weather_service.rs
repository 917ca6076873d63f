//! Weather service
//!
//! Implements every operation the HTTP layer exposes: the current-weather
//! passthrough, city registration with an immediate fetch, city listing,
//! hourly lookups against the cache, and the refresh pass the background
//! task drives.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{Local, NaiveTime, Timelike};
use domain::DomainError;
use domain::entities::City;
use domain::value_objects::{CityName, GeoLocation};
use tracing::{debug, info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{CurrentConditions, ForecastPort};
use crate::store::WeatherStore;

/// Parameters returned by `weather_by_city` when the request names none
pub const DEFAULT_PARAMETERS: [&str; 4] = ["temperature", "humidity", "wind_speed", "precipitation"];

/// Suffix appended to a requested parameter name to form the provider's
/// hourly series key (`temperature` -> `temperature_2m`)
pub const HOURLY_PARAM_SUFFIX: &str = "_2m";

/// Outcome of one refresh pass over the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RefreshSummary {
    /// Cities whose cache entry was overwritten
    pub refreshed: usize,
    /// Cities whose fetch failed; their stale entries are kept
    pub failed: usize,
}

/// Service implementing the weather proxy operations
pub struct WeatherService {
    store: Arc<WeatherStore>,
    forecast: Arc<dyn ForecastPort>,
}

impl std::fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherService")
            .field("store", &self.store)
            .field("forecast", &"<ForecastPort>")
            .finish()
    }
}

impl WeatherService {
    /// Create a new weather service
    #[must_use]
    pub fn new(store: Arc<WeatherStore>, forecast: Arc<dyn ForecastPort>) -> Self {
        Self { store, forecast }
    }

    /// Fetch current conditions for arbitrary coordinates
    ///
    /// Direct passthrough to the provider; not tied to the registry and
    /// nothing is cached.
    #[instrument(skip(self))]
    pub async fn current_weather(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentConditions, ApplicationError> {
        let location = validate_location(latitude, longitude)?;
        let forecast = self.forecast.fetch(&location).await?;
        Ok(forecast.current)
    }

    /// Register a city and populate its cache entry
    ///
    /// The initial fetch happens before the registry insert: a failed fetch
    /// leaves nothing registered, so a registered city always has a cache
    /// entry.
    ///
    /// # Errors
    ///
    /// Returns `CityExists` for a duplicate name, a domain error for an
    /// invalid name or coordinates, and `Fetch` when the provider call fails.
    #[instrument(skip(self))]
    pub async fn add_city(
        &self,
        name: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<CityName, ApplicationError> {
        let name = CityName::new(name)?;
        let location = validate_location(latitude, longitude)?;

        if self.store.registry.contains(&name) {
            return Err(ApplicationError::CityExists(name.to_string()));
        }

        let forecast = self.forecast.fetch(&location).await?;

        // The registry re-checks for duplicates under its write lock, so a
        // concurrent add of the same name loses cleanly here.
        self.store.registry.add(City::new(name.clone(), location))?;
        self.store.cache.put(name.as_str(), forecast);

        info!(city = %name, "City registered");
        Ok(name)
    }

    /// Registered city names in insertion order
    #[must_use]
    pub fn list_cities(&self) -> Vec<String> {
        self.store.registry.names()
    }

    /// Look up cached hourly values for a city at an hour of day
    ///
    /// The hour index comes from `time` (parsed as `%H:%M`) or the current
    /// local hour. Each requested parameter is matched against the hourly
    /// series by appending [`HOURLY_PARAM_SUFFIX`]; parameters without a
    /// matching series are omitted from the result rather than erroring.
    ///
    /// # Errors
    ///
    /// Returns `CityNotFound` when the city has no cache entry,
    /// `DomainError::InvalidTime` when `time` does not parse, and
    /// `HourOutOfRange` when a matched series is shorter than the index.
    #[instrument(skip(self))]
    pub fn weather_by_city(
        &self,
        name: &str,
        time: Option<&str>,
        parameters: &[String],
    ) -> Result<BTreeMap<String, f64>, ApplicationError> {
        let Some(forecast) = self.store.cache.get(name) else {
            return Err(ApplicationError::CityNotFound(name.to_string()));
        };

        let hour = hour_index(time)?;

        let mut values = BTreeMap::new();
        for param in parameters {
            let key = format!("{param}{HOURLY_PARAM_SUFFIX}");
            let Some(series) = forecast.hourly.get(&key) else {
                debug!(city = %name, parameter = %param, "Parameter absent from hourly data, omitting");
                continue;
            };
            let value = series
                .get(hour)
                .copied()
                .ok_or(ApplicationError::HourOutOfRange {
                    hour,
                    len: series.len(),
                })?;
            values.insert(param.clone(), value);
        }

        Ok(values)
    }

    /// Re-fetch forecasts for every registered city
    ///
    /// A failed fetch is logged and skipped; the pass always completes and
    /// the city keeps its previous cache entry until the next cycle.
    #[instrument(skip(self))]
    pub async fn refresh_all(&self) -> RefreshSummary {
        let cities = self.store.registry.snapshot();
        let mut summary = RefreshSummary::default();

        for city in cities {
            match self.forecast.fetch(city.location()).await {
                Ok(forecast) => {
                    self.store.cache.put(city.name().as_str(), forecast);
                    summary.refreshed += 1;
                },
                Err(e) => {
                    warn!(
                        city = %city.name(),
                        error = %e,
                        "Forecast refresh failed, keeping previous entry"
                    );
                    summary.failed += 1;
                },
            }
        }

        if summary.refreshed > 0 || summary.failed > 0 {
            info!(
                refreshed = summary.refreshed,
                failed = summary.failed,
                "Forecast refresh pass complete"
            );
        }

        summary
    }

    /// Check if the forecast provider is reachable
    pub async fn is_provider_available(&self) -> bool {
        self.forecast.is_available().await
    }
}

/// Validate raw coordinates into a `GeoLocation`
fn validate_location(latitude: f64, longitude: f64) -> Result<GeoLocation, ApplicationError> {
    GeoLocation::new(latitude, longitude)
        .map_err(|e| DomainError::ValidationError(e.to_string()).into())
}

/// Hour-of-day index from an optional `HH:MM` string
///
/// Falls back to the current local hour when no time is given.
fn hour_index(time: Option<&str>) -> Result<usize, ApplicationError> {
    match time {
        Some(s) => NaiveTime::parse_from_str(s, "%H:%M")
            .map(|t| t.hour() as usize)
            .map_err(|_| DomainError::InvalidTime(s.to_string()).into()),
        None => Ok(Local::now().hour() as usize),
    }
}
