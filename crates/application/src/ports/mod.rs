//! Ports - Interfaces to the outside world

mod forecast_port;

pub use forecast_port::{CurrentConditions, Forecast, ForecastPort, HourlySeries};

#[cfg(test)]
pub use forecast_port::MockForecastPort;
