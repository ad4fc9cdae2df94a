//! Route and day-horizon models

use serde::{Deserialize, Serialize};

use crate::RouteCastError;

/// Ordered list of city names representing a travel path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    cities: Vec<String>,
}

impl Route {
    /// Create a route from an ordered city list
    #[must_use]
    pub fn new(cities: Vec<String>) -> Self {
        Self { cities }
    }

    /// Build a route from the three input fields: start, newline-delimited
    /// intermediate stops, end.
    ///
    /// Blank intermediate lines are dropped. Start and end are kept even when
    /// blank; an unknown or empty city name fails at fetch time and is then
    /// skipped like any other fetch failure.
    #[must_use]
    pub fn from_waypoints(start: &str, via: &str, end: &str) -> Self {
        let mut cities = vec![start.trim().to_string()];
        cities.extend(
            via.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from),
        );
        cities.push(end.trim().to_string());
        Self { cities }
    }

    /// City names in route order
    #[must_use]
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

/// Forecast day horizon, restricted to 1..=7 days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Horizon(u8);

impl Horizon {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 7;

    /// Number of days covered by this horizon
    #[must_use]
    pub fn days(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Horizon {
    type Error = RouteCastError;

    fn try_from(days: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&days) {
            Ok(Self(days))
        } else {
            Err(RouteCastError::validation(format!(
                "Day horizon must be between {} and {}, got {days}",
                Self::MIN,
                Self::MAX
            )))
        }
    }
}

impl From<Horizon> for u8 {
    fn from(horizon: Horizon) -> Self {
        horizon.0
    }
}
