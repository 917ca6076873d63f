//! Value Objects - Immutable, identity-less domain primitives

mod city_name;
mod geo_location;

pub use city_name::CityName;
pub use geo_location::{GeoLocation, InvalidCoordinates};
