//! Open-Meteo forecast integration
//!
//! Client for the Open-Meteo Weather API (<https://open-meteo.com>).
//! Fetches current conditions and hourly forecast arrays without requiring
//! an API key, and implements the application layer's `ForecastPort`.

pub mod client;
mod models;

pub use client::{MeteoConfig, MeteoError, OpenMeteoClient};
