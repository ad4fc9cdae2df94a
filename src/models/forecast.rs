//! Aggregated route forecast collection

use serde::{Deserialize, Serialize};

use super::CityForecast;

/// Forecast samples for one position along the route
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteLeg {
    /// Zero-based position of this city in the route
    pub position: usize,
    /// City name as entered by the user
    pub city: String,
    /// Windowed forecast samples for this city
    pub samples: CityForecast,
}

/// Ordered collection of per-city forecasts, one slot per route position.
///
/// Legs are keyed by (position, city), so the same city name occurring at two
/// route positions occupies two independent slots instead of overwriting.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RouteForecastSet {
    legs: Vec<RouteLeg>,
}

impl RouteForecastSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, leg: RouteLeg) {
        self.legs.push(leg);
    }

    /// Legs in route order
    #[must_use]
    pub fn legs(&self) -> &[RouteLeg] {
        &self.legs
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteLeg> {
        self.legs.iter()
    }

    /// First leg whose city matches `name`, for legend lookup by name
    #[must_use]
    pub fn leg_named(&self, name: &str) -> Option<&RouteLeg> {
        self.legs.iter().find(|leg| leg.city == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leg(position: usize, city: &str) -> RouteLeg {
        RouteLeg {
            position,
            city: city.to_string(),
            samples: Vec::new(),
        }
    }

    #[test]
    fn test_duplicate_city_names_keep_separate_slots() {
        let mut set = RouteForecastSet::new();
        set.push(leg(0, "Paris"));
        set.push(leg(1, "Berlin"));
        set.push(leg(2, "Paris"));

        assert_eq!(set.len(), 3);
        assert_eq!(set.legs()[0].position, 0);
        assert_eq!(set.legs()[2].position, 2);
        assert_eq!(set.legs()[2].city, "Paris");
    }

    #[test]
    fn test_leg_named_returns_first_match() {
        let mut set = RouteForecastSet::new();
        set.push(leg(0, "Paris"));
        set.push(leg(1, "Paris"));

        let found = set.leg_named("Paris").unwrap();
        assert_eq!(found.position, 0);
        assert!(set.leg_named("Rome").is_none());
    }
}
