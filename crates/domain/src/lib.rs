//! Domain layer for Weathervane
//!
//! Contains core entities, value objects, and domain errors.
//! This layer has no knowledge of HTTP or the forecast provider.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
