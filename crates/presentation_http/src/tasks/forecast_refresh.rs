//! Forecast refresh background task
//!
//! Periodically re-fetches forecasts for every registered city and
//! overwrites the cache entries.

use std::sync::Arc;
use std::time::Duration;

use application::WeatherService;
use tracing::{debug, info};

/// Spawn a background task that periodically refreshes cached forecasts.
///
/// Each cycle runs one pass over the registry snapshot; a failed per-city
/// fetch is logged and skipped inside the service, so the loop itself never
/// terminates on provider errors.
///
/// Returns a `JoinHandle` that can be used to abort the task on shutdown.
///
/// # Arguments
///
/// * `weather_service` - The service driving the refresh pass
/// * `interval` - Time between passes
pub fn spawn_forecast_refresh_task(
    weather_service: Arc<WeatherService>,
    interval: Duration,
) -> tokio::task::JoinHandle<()> {
    info!(
        interval_secs = interval.as_secs(),
        "Starting forecast refresh background task"
    );

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // The first tick completes immediately; registration already fetched
        // an initial forecast for every city, so skip it.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            debug!("Running forecast refresh pass");
            weather_service.refresh_all().await;
        }
    })
}
