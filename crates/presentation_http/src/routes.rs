//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Weather API
        .route("/current-weather/", get(handlers::weather::current_weather))
        .route("/weather-by-city/", post(handlers::weather::weather_by_city))
        // City registry API
        .route("/add-city/", post(handlers::cities::add_city))
        .route("/cities/", get(handlers::cities::list_cities))
        // Attach state
        .with_state(state)
}
