//! Weather query handlers

use std::collections::BTreeMap;

use application::services::DEFAULT_PARAMETERS;
use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for the current-weather passthrough
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeatherQuery {
    /// Latitude (-90 to 90)
    pub latitude: f64,
    /// Longitude (-180 to 180)
    pub longitude: f64,
}

/// Current conditions response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeatherResponse {
    /// Temperature in Celsius
    pub temperature: f64,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// Surface pressure in hPa
    ///
    /// Always null: the provider's current-weather section carries no
    /// pressure reading for the parameters requested. The field is kept in
    /// the schema for compatibility with existing consumers.
    pub pressure: Option<f64>,
}

/// Fetch current conditions for arbitrary coordinates
///
/// GET /current-weather/?latitude=..&longitude=..
#[instrument(skip(state))]
pub async fn current_weather(
    State(state): State<AppState>,
    Query(query): Query<CurrentWeatherQuery>,
) -> Result<Json<CurrentWeatherResponse>, ApiError> {
    let current = state
        .weather_service
        .current_weather(query.latitude, query.longitude)
        .await?;

    Ok(Json(CurrentWeatherResponse {
        temperature: current.temperature,
        wind_speed: current.wind_speed,
        pressure: current.pressure,
    }))
}

/// Request body for hourly lookups against the cache
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherByCityRequest {
    /// Registered city name
    pub city_name: String,
    /// Time of day as `HH:MM`; defaults to the current hour
    #[serde(default)]
    pub time: Option<String>,
    /// Parameter names to return
    #[serde(default = "default_parameters")]
    pub parameters: Vec<String>,
}

fn default_parameters() -> Vec<String> {
    DEFAULT_PARAMETERS.iter().map(ToString::to_string).collect()
}

/// Look up cached hourly values for a registered city
///
/// POST /weather-by-city/
#[instrument(skip(state), fields(city = %request.city_name))]
pub async fn weather_by_city(
    State(state): State<AppState>,
    Json(request): Json<WeatherByCityRequest>,
) -> Result<Json<BTreeMap<String, f64>>, ApiError> {
    let values = state.weather_service.weather_by_city(
        &request.city_name,
        request.time.as_deref(),
        &request.parameters,
    )?;

    Ok(Json(values))
}
