//! Open-Meteo forecast client
//!
//! HTTP client for the Open-Meteo forecast endpoint.

use application::ApplicationError;
use application::ports::{CurrentConditions, Forecast, ForecastPort, HourlySeries};
use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::ApiResponse;

/// Hourly parameters requested from the provider on every fetch
const HOURLY_PARAMS: &str = "temperature_2m,humidity_2m,windspeed_10m,precipitation";

/// Forecast client errors
#[derive(Debug, Error)]
pub enum MeteoError {
    /// HTTP client could not be initialized
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the forecast service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the forecast service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Forecast service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeteoConfig {
    /// Open-Meteo API base URL (default: <https://api.open-meteo.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for MeteoConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Open-Meteo HTTP client
#[derive(Debug)]
pub struct OpenMeteoClient {
    client: Client,
    config: MeteoConfig,
}

impl OpenMeteoClient {
    /// Create a new Open-Meteo client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: MeteoConfig) -> Result<Self, MeteoError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| MeteoError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, MeteoError> {
        Self::new(MeteoConfig::default())
    }

    /// Build the API URL for a forecast request
    fn build_forecast_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}/forecast?latitude={}&longitude={}&current_weather=true&hourly={}",
            self.config.base_url, latitude, longitude, HOURLY_PARAMS
        )
    }

    /// Fetch and parse a forecast for the given coordinates
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    pub async fn fetch_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Forecast, MeteoError> {
        let url = self.build_forecast_url(latitude, longitude);
        debug!(url = %url, "Fetching forecast");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| MeteoError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MeteoError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(MeteoError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(MeteoError::RequestFailed(format!("HTTP {status}")));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| MeteoError::ParseError(e.to_string()))?;

        Self::into_forecast(api_response)
    }

    /// Map the raw API response into the application payload
    fn into_forecast(response: ApiResponse) -> Result<Forecast, MeteoError> {
        let current = response.current_weather.ok_or_else(|| {
            MeteoError::ParseError("No current weather data in response".to_string())
        })?;

        let hourly = response
            .hourly
            .ok_or_else(|| MeteoError::ParseError("No hourly data in response".to_string()))?;

        Ok(Forecast {
            latitude: response.latitude,
            longitude: response.longitude,
            current: CurrentConditions {
                time: current.time,
                temperature: current.temperature,
                wind_speed: current.windspeed,
                wind_direction: current.winddirection,
                weather_code: current.weathercode,
                pressure: None,
            },
            hourly: HourlySeries {
                time: hourly.time,
                series: hourly.series,
            },
        })
    }
}

#[async_trait]
impl ForecastPort for OpenMeteoClient {
    async fn fetch(&self, location: &GeoLocation) -> Result<Forecast, ApplicationError> {
        self.fetch_forecast(location.latitude(), location.longitude())
            .await
            .map_err(|e| ApplicationError::Fetch(e.to_string()))
    }

    async fn is_available(&self) -> bool {
        // Probe with Berlin coordinates
        self.fetch_forecast(52.52, 13.41).await.is_ok()
    }
}
