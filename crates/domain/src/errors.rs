//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Invalid city name
    #[error("Invalid city name: {0}")]
    InvalidCityName(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Time-of-day parsing error
    #[error("Invalid time: {0}")]
    InvalidTime(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_city_name_message() {
        let err = DomainError::InvalidCityName("city name must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid city name: city name must not be empty"
        );
    }

    #[test]
    fn validation_error_message() {
        let err = DomainError::ValidationError("latitude out of range".to_string());
        assert_eq!(err.to_string(), "Validation failed: latitude out of range");
    }

    #[test]
    fn invalid_time_message() {
        let err = DomainError::InvalidTime("25:99".to_string());
        assert_eq!(err.to_string(), "Invalid time: 25:99");
    }
}
