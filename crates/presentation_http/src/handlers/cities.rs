//! City registration handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for registering a city
#[derive(Debug, Clone, Deserialize)]
pub struct AddCityRequest {
    /// City name; the unique identifier of the registration
    pub name: String,
    /// Latitude (-90 to 90)
    pub latitude: f64,
    /// Longitude (-180 to 180)
    pub longitude: f64,
}

/// Confirmation message response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Register a city and fetch its first forecast
///
/// POST /add-city/
#[instrument(skip(state), fields(city = %request.name))]
pub async fn add_city(
    State(state): State<AppState>,
    Json(request): Json<AddCityRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let name = state
        .weather_service
        .add_city(&request.name, request.latitude, request.longitude)
        .await?;

    Ok(Json(MessageResponse {
        message: format!("City {name} added successfully."),
    }))
}

/// List registered city names in registration order
///
/// GET /cities/
pub async fn list_cities(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.weather_service.list_cities())
}
