//! Data models for the RouteCast application
//!
//! This module contains the core domain models organized by concern:
//! - Route: ordered city names and the day horizon
//! - Sample: one time-stamped forecast observation
//! - Forecast: aggregated per-route forecast collections
//! - Openweather: provider wire format and conversions

pub mod forecast;
pub mod openweather;
pub mod route;
pub mod sample;

// Re-export all public types for convenient access
pub use forecast::{RouteForecastSet, RouteLeg};
pub use route::{Horizon, Route};
pub use sample::{CityForecast, ForecastSample};
