//! HTTP request handlers

pub mod cities;
pub mod health;
pub mod weather;
