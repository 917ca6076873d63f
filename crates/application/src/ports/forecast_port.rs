//! Forecast provider port
//!
//! Defines the interface for fetching forecast data and the payload types
//! cached per city.

use std::collections::BTreeMap;

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Instantaneous readings from the provider's current-weather section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Observation time as reported by the provider (ISO 8601)
    pub time: String,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// Wind direction in degrees (0-360)
    pub wind_direction: f64,
    /// WMO weather code
    pub weather_code: u8,
    /// Surface pressure in hPa
    ///
    /// Open-Meteo's current-weather block carries no pressure reading for
    /// the parameters we request, so this stays `None` for provider data.
    pub pressure: Option<f64>,
}

/// Per-parameter hourly arrays indexed by hour-of-day
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HourlySeries {
    /// Timestamps for each hourly slot (ISO 8601)
    pub time: Vec<String>,
    /// Parameter name (provider key, e.g. `temperature_2m`) to hourly values
    pub series: BTreeMap<String, Vec<f64>>,
}

impl HourlySeries {
    /// Look up the hourly array for a provider parameter key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[f64]> {
        self.series.get(key).map(Vec::as_slice)
    }

    /// Check whether a provider parameter key is present
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.series.contains_key(key)
    }
}

/// A complete forecast payload for one location
///
/// Owned by the forecast cache; replaced wholesale on each refresh, never
/// merged or partially updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Forecast {
    /// Latitude the provider resolved the request to
    pub latitude: f64,
    /// Longitude the provider resolved the request to
    pub longitude: f64,
    /// Instantaneous conditions
    pub current: CurrentConditions,
    /// Hourly arrays
    pub hourly: HourlySeries,
}

/// Port for forecast provider operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ForecastPort: Send + Sync {
    /// Fetch a forecast for a location
    ///
    /// One outbound call per invocation; no retry.
    async fn fetch(&self, location: &GeoLocation) -> Result<Forecast, ApplicationError>;

    /// Check if the forecast provider is reachable
    async fn is_available(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn ForecastPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn ForecastPort>();
    }

    #[test]
    fn hourly_series_lookup() {
        let mut series = BTreeMap::new();
        series.insert("temperature_2m".to_string(), vec![1.0, 2.0, 3.0]);

        let hourly = HourlySeries {
            time: vec![
                "2025-01-01T00:00".to_string(),
                "2025-01-01T01:00".to_string(),
                "2025-01-01T02:00".to_string(),
            ],
            series,
        };

        assert!(hourly.contains("temperature_2m"));
        assert!(!hourly.contains("pressure_2m"));
        assert_eq!(hourly.get("temperature_2m"), Some(&[1.0, 2.0, 3.0][..]));
        assert!(hourly.get("pressure_2m").is_none());
    }

    #[test]
    fn forecast_serde_roundtrip() {
        let forecast = Forecast {
            latitude: 48.85,
            longitude: 2.35,
            current: CurrentConditions {
                time: "2025-01-01T12:00".to_string(),
                temperature: 8.5,
                wind_speed: 12.0,
                wind_direction: 225.0,
                weather_code: 3,
                pressure: None,
            },
            hourly: HourlySeries::default(),
        };

        let json = serde_json::to_string(&forecast).expect("serialize");
        let parsed: Forecast = serde_json::from_str(&json).expect("deserialize");
        assert!((parsed.current.temperature - 8.5).abs() < f64::EPSILON);
        assert!(parsed.current.pressure.is_none());
    }
}
