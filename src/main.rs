use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use routecast::api::AppState;
use routecast::{OpenWeatherClient, RouteCastConfig, RouteForecastService};

#[tokio::main]
async fn main() -> Result<()> {
    let config = RouteCastConfig::load()?;

    let filter =
        EnvFilter::try_new(&config.logging.level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let client = OpenWeatherClient::new(config.weather.clone())
        .context("Failed to create weather client")?;
    let service = RouteForecastService::new(Arc::new(client));
    let state = Arc::new(AppState::new(service));

    routecast::web::run(&config.server, state).await
}
