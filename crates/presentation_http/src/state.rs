//! Application state shared across handlers

use std::sync::Arc;

use application::WeatherService;

use crate::config::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Weather service backing every endpoint
    pub weather_service: Arc<WeatherService>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("weather_service", &self.weather_service)
            .field("config", &self.config)
            .finish()
    }
}
