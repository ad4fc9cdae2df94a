//! Route forecast aggregation service
//!
//! Walks the route in order, fetches each city's forecast, windows it to the
//! requested day horizon and collects the per-city sample series. A city
//! whose fetch fails is skipped; one bad city never aborts the route.

use std::sync::Arc;

use tracing::{info, warn};

use crate::models::openweather::SAMPLES_PER_DAY;
use crate::models::{ForecastSample, Horizon, Route, RouteForecastSet, RouteLeg};
use crate::weather::ForecastSource;

/// Aggregates per-city forecasts over a route
pub struct RouteForecastService {
    source: Arc<dyn ForecastSource>,
}

impl RouteForecastService {
    #[must_use]
    pub fn new(source: Arc<dyn ForecastSource>) -> Self {
        Self { source }
    }

    /// Fetch and window forecasts for every city of `route`, in order.
    ///
    /// Cities are fetched sequentially. Each successful fetch is truncated to
    /// the first `days * SAMPLES_PER_DAY` entries (the provider list starts
    /// at "now", so the window is a prefix-take) and converted to samples.
    /// Failed cities contribute no leg. Stateless between calls.
    pub async fn aggregate(&self, route: &Route, horizon: Horizon) -> RouteForecastSet {
        let window = usize::from(horizon.days()) * SAMPLES_PER_DAY;
        let mut set = RouteForecastSet::new();

        for (position, city) in route.cities().iter().enumerate() {
            match self.source.fetch(city).await {
                Ok(entries) => {
                    let samples: Vec<ForecastSample> = entries
                        .iter()
                        .take(window)
                        .map(ForecastSample::from)
                        .collect();
                    set.push(RouteLeg {
                        position,
                        city: city.clone(),
                        samples,
                    });
                }
                Err(err) => {
                    warn!(city = %city, %err, "skipping city after failed fetch");
                }
            }
        }

        info!(
            cities = route.len(),
            legs = set.len(),
            days = horizon.days(),
            "aggregated route forecast"
        );
        set
    }
}
