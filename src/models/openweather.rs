//! `OpenWeatherMap` API response structures and conversion utilities

use serde::Deserialize;

use super::ForecastSample;

/// Forecast samples the provider returns per day (3-hour interval)
pub const SAMPLES_PER_DAY: usize = 8;

/// Forecast response from the `OpenWeatherMap` 5-day/3-hour endpoint
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub list: Vec<ForecastEntry>,
}

/// One 3-hour forecast entry
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastEntry {
    /// Provider-native timestamp, e.g. "2026-08-05 12:00:00"
    pub dt_txt: String,
    pub main: Main,
    pub wind: Wind,
    /// Precipitation probability in [0,1]; absent means 0
    #[serde(default)]
    pub pop: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Main {
    pub temp: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Wind {
    pub speed: f64,
}

impl From<&ForecastEntry> for ForecastSample {
    fn from(entry: &ForecastEntry) -> Self {
        Self {
            timestamp: entry.dt_txt.clone(),
            temperature: entry.main.temp,
            wind_speed: entry.wind.speed,
            precipitation_probability: entry.pop * 100.0,
        }
    }
}
