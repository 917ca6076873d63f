//! Weathervane HTTP presentation layer
//!
//! This crate provides the HTTP API and the forecast refresh background task.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod tasks;

pub use config::AppConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
pub use tasks::spawn_forecast_refresh_task;
