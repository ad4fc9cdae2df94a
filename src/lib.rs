//! `RouteCast` - weather comparison along a travel route
//!
//! This library fetches multi-day forecasts for every city of a
//! user-specified route, windows them to a day horizon and assembles
//! per-metric chart series for the web frontend.

pub mod api;
pub mod chart;
pub mod config;
pub mod error;
pub mod models;
pub mod route_forecast;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use chart::{Figure, Metric, build_figure};
pub use config::RouteCastConfig;
pub use error::RouteCastError;
pub use models::{CityForecast, ForecastSample, Horizon, Route, RouteForecastSet};
pub use route_forecast::RouteForecastService;
pub use weather::{ForecastSource, OpenWeatherClient};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, RouteCastError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
