//! Application layer for Weathervane
//!
//! Defines the forecast provider port, the in-memory weather store, and the
//! weather service that implements every operation the HTTP layer exposes.

pub mod error;
pub mod ports;
pub mod services;
pub mod store;

pub use error::ApplicationError;
pub use services::{RefreshSummary, WeatherService};
pub use store::WeatherStore;
