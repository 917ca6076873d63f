//! Application services

mod weather_service;

pub use weather_service::{
    DEFAULT_PARAMETERS, HOURLY_PARAM_SUFFIX, RefreshSummary, WeatherService,
};
