//! City name value object

use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated city name
///
/// Names are trimmed on construction and must be non-empty. The name is the
/// unique identifier of a registered city.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityName(String);

impl CityName {
    /// Maximum accepted name length in characters
    pub const MAX_LEN: usize = 128;

    /// Create a new city name with validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCityName` if the trimmed name is empty
    /// or longer than [`Self::MAX_LEN`] characters.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidCityName(
                "city name must not be empty".to_string(),
            ));
        }
        if trimmed.chars().count() > Self::MAX_LEN {
            return Err(DomainError::InvalidCityName(format!(
                "city name must not exceed {} characters",
                Self::MAX_LEN
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the name as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CityName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
