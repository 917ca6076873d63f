//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A city with the same name is already registered
    #[error("City {0} already exists")]
    CityExists(String),

    /// No cached forecast for the requested city
    #[error("City not found: {0}")]
    CityNotFound(String),

    /// Outbound call to the forecast provider failed
    #[error("Error fetching weather data: {0}")]
    Fetch(String),

    /// Requested hour falls outside the cached hourly arrays
    #[error("Hour index {hour} out of range for hourly data of length {len}")]
    HourOutOfRange { hour: usize, len: usize },

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
