//! HTTP API for the route weather chart
//!
//! One endpoint drives the whole pipeline: the frontend posts the route
//! fields together with a trigger count and receives the chart payload.
//! A trigger count of zero means page load; the pipeline must not run and
//! the stored (initially empty) figure is returned without any fetch.
//! Overlapping triggers are arbitrated by a generation counter: only the
//! newest pass may publish its figure, a superseded pass answers with the
//! latest published one.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use axum::Router;
use axum::extract::State;
use axum::response::Json;
use axum::routing::get;
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::debug;

use crate::chart::{self, Figure, Metric};
use crate::models::{Horizon, Route};
use crate::route_forecast::RouteForecastService;

/// Monotonic trigger generations; each new pass invalidates all older ones.
#[derive(Debug, Default)]
pub struct Generation(AtomicU64);

impl Generation {
    /// Start a new pass and return its token
    pub fn begin(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `token` still belongs to the newest pass
    pub fn is_current(&self, token: u64) -> bool {
        self.0.load(Ordering::SeqCst) == token
    }
}

/// Shared application state behind the router
pub struct AppState {
    service: RouteForecastService,
    generation: Generation,
    latest: RwLock<Figure>,
}

impl AppState {
    #[must_use]
    pub fn new(service: RouteForecastService) -> Self {
        Self {
            service,
            generation: Generation::default(),
            latest: RwLock::new(Figure::empty()),
        }
    }
}

/// Chart request posted by the frontend on every control change
#[derive(Debug, Deserialize)]
pub struct ChartRequest {
    pub start: String,
    /// Newline-delimited intermediate stops
    #[serde(default)]
    pub via: String,
    pub end: String,
    pub days: Horizon,
    pub metric: Metric,
    /// How often the user has triggered a refresh; 0 means page load
    #[serde(default)]
    pub triggers: u64,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/chart", get(current_chart).post(update_chart))
        .with_state(state)
}

/// Latest published figure; empty until the first completed trigger
async fn current_chart(State(state): State<Arc<AppState>>) -> Json<Figure> {
    Json(state.latest.read().await.clone())
}

/// Run one aggregation pass and publish its figure, unless a newer trigger
/// superseded this pass in the meantime.
async fn update_chart(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChartRequest>,
) -> Json<Figure> {
    if request.triggers == 0 {
        // Page load; never touch the provider.
        return Json(state.latest.read().await.clone());
    }

    let token = state.generation.begin();
    let route = Route::from_waypoints(&request.start, &request.via, &request.end);
    let set = state.service.aggregate(&route, request.days).await;
    let figure = chart::build_figure(&set, request.metric);

    let mut latest = state.latest.write().await;
    if state.generation.is_current(token) {
        *latest = figure.clone();
        Json(figure)
    } else {
        debug!(token, "pass superseded by a newer trigger; dropping result");
        Json(latest.clone())
    }
}
