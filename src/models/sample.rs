//! Forecast observation model

use serde::{Deserialize, Serialize};

/// One time-stamped forecast observation for a city
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ForecastSample {
    /// Provider-native timestamp, ascending and string-comparable
    pub timestamp: String,
    /// Temperature in degrees (provider unit system)
    pub temperature: f64,
    /// Wind speed in provider units (m/s for the metric system)
    pub wind_speed: f64,
    /// Precipitation probability as a percentage (0-100)
    pub precipitation_probability: f64,
}

/// Forecast samples for one city, in provider order (timestamp ascending)
pub type CityForecast = Vec<ForecastSample>;
