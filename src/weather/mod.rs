//! Forecast retrieval from the `OpenWeatherMap` 5-day/3-hour API
//!
//! The fetcher issues one request per city with a fixed unit system and
//! presentation language. Every failure cause (unknown city, exceeded quota,
//! transport error) collapses into a single fetch error; the caller treats
//! them all identically and skips the city. No retries, no caching.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::RouteCastError;
use crate::config::WeatherConfig;
use crate::models::openweather::{ForecastEntry, ForecastResponse};

/// Source of raw per-city forecast entries.
///
/// Object-safe so the aggregation service can run against test doubles.
#[async_trait]
pub trait ForecastSource: Send + Sync {
    /// Fetch the raw forecast list for `city`, or a single fetch failure
    /// carrying no partial data.
    async fn fetch(&self, city: &str) -> crate::Result<Vec<ForecastEntry>>;
}

/// HTTP client for the `OpenWeatherMap` forecast endpoint
pub struct OpenWeatherClient {
    http: Client,
    config: WeatherConfig,
}

impl OpenWeatherClient {
    /// Create a new client from injected weather configuration.
    ///
    /// No request timeout is set; a hanging provider call stalls the whole
    /// aggregation pass.
    pub fn new(config: WeatherConfig) -> crate::Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("routecast/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RouteCastError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }
}

#[async_trait]
impl ForecastSource for OpenWeatherClient {
    async fn fetch(&self, city: &str) -> crate::Result<Vec<ForecastEntry>> {
        let url = format!("{}/forecast", self.config.base_url);
        debug!(city, "requesting forecast");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.config.api_key.as_str()),
                ("units", self.config.units.as_str()),
                ("lang", self.config.language.as_str()),
            ])
            .send()
            .await
            .map_err(|e| RouteCastError::fetch(city, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RouteCastError::fetch(
                city,
                format!("provider answered {status}"),
            ));
        }

        let body: ForecastResponse = response
            .json()
            .await
            .map_err(|e| RouteCastError::fetch(city, format!("invalid forecast payload: {e}")))?;

        Ok(body.list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: String) -> WeatherConfig {
        WeatherConfig {
            api_key: "test-key-12345678".to_string(),
            base_url,
            units: "metric".to_string(),
            language: "en".to_string(),
        }
    }

    fn forecast_body(entries: usize) -> serde_json::Value {
        let list: Vec<_> = (0..entries)
            .map(|i| {
                json!({
                    "dt_txt": format!("2026-08-{:02} {:02}:00:00", 5 + i / 8, (i % 8) * 3),
                    "main": { "temp": 20.0 + i as f64 },
                    "wind": { "speed": 3.0 },
                    "pop": 0.1
                })
            })
            .collect();
        json!({ "cod": "200", "list": list })
    }

    #[tokio::test]
    async fn test_fetch_parses_forecast_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .and(query_param("q", "Paris"))
            .and(query_param("appid", "test-key-12345678"))
            .and(query_param("units", "metric"))
            .and(query_param("lang", "en"))
            .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(3)))
            .mount(&server)
            .await;

        let client = OpenWeatherClient::new(test_config(server.uri())).unwrap();
        let entries = client.fetch("Paris").await.unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].dt_txt, "2026-08-05 00:00:00");
        assert_eq!(entries[0].main.temp, 20.0);
    }

    #[tokio::test]
    async fn test_fetch_unknown_city_is_a_fetch_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(json!({ "cod": "404", "message": "city not found" })),
            )
            .mount(&server)
            .await;

        let client = OpenWeatherClient::new(test_config(server.uri())).unwrap();
        let err = client.fetch("Nowhere").await.unwrap_err();
        assert!(matches!(err, RouteCastError::Fetch { .. }));
    }

    #[tokio::test]
    async fn test_fetch_server_error_is_a_fetch_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = OpenWeatherClient::new(test_config(server.uri())).unwrap();
        let err = client.fetch("Paris").await.unwrap_err();
        assert!(matches!(err, RouteCastError::Fetch { .. }));
    }

    #[tokio::test]
    async fn test_fetch_malformed_body_is_a_fetch_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = OpenWeatherClient::new(test_config(server.uri())).unwrap();
        let err = client.fetch("Paris").await.unwrap_err();
        assert!(matches!(err, RouteCastError::Fetch { .. }));
    }
}
