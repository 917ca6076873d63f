//! Raw wire models for the Open-Meteo API

use std::collections::BTreeMap;

use serde::Deserialize;

/// Raw `current_weather` block
///
/// Open-Meteo returns temperature, wind, and the WMO code here; there is no
/// pressure field in this block.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCurrentWeather {
    pub time: String,
    pub temperature: f64,
    pub windspeed: f64,
    pub winddirection: f64,
    pub weathercode: u8,
}

/// Raw `hourly` block: timestamps plus one array per requested parameter
#[derive(Debug, Clone, Deserialize)]
pub struct RawHourly {
    pub time: Vec<String>,
    #[serde(flatten)]
    pub series: BTreeMap<String, Vec<f64>>,
}

/// Raw API response
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub current_weather: Option<RawCurrentWeather>,
    pub hourly: Option<RawHourly>,
}
