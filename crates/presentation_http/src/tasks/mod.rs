//! Background tasks for the HTTP presentation layer

mod forecast_refresh;

pub use forecast_refresh::spawn_forecast_refresh_task;
