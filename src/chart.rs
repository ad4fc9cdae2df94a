//! Metric projection and chart assembly
//!
//! The metric selector owns both the value projection and the trace shape so
//! the two stay consistent: adding a metric means adding exactly one
//! projection rule and one shape rule here. The produced `Figure` follows the
//! Plotly JSON schema consumed by the frontend renderer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{ForecastSample, RouteForecastSet};

/// Weather dimension selected for charting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Temperature,
    WindSpeed,
    Precipitation,
}

/// Shape of the per-city series for a metric
enum TraceShape {
    LinesWithMarkers,
    Bars,
}

impl Metric {
    /// Project the metric value out of one sample.
    ///
    /// A pure projection, applied identically to every city.
    #[must_use]
    pub fn value(self, sample: &ForecastSample) -> f64 {
        match self {
            Metric::Temperature => sample.temperature,
            Metric::WindSpeed => sample.wind_speed,
            Metric::Precipitation => sample.precipitation_probability,
        }
    }

    fn shape(self) -> TraceShape {
        match self {
            Metric::Temperature | Metric::WindSpeed => TraceShape::LinesWithMarkers,
            Metric::Precipitation => TraceShape::Bars,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Metric::Temperature => "Temperature",
            Metric::WindSpeed => "Wind speed",
            Metric::Precipitation => "Precipitation probability",
        };
        f.write_str(label)
    }
}

/// One per-city series in the chart payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trace {
    /// Plotly trace type ("scatter" or "bar")
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Legend label; the city name
    pub name: String,
    pub x: Vec<String>,
    pub y: Vec<f64>,
}

/// Axis metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Axis {
    pub title: String,
}

/// Chart layout metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Layout {
    pub title: String,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub hovermode: String,
}

/// Chart payload consumed by the rendering library
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    /// Figure with no series; the renderer draws an empty chart
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Build one series per route leg for the selected metric.
///
/// An empty set produces a figure with zero traces rather than an error.
#[must_use]
pub fn build_figure(set: &RouteForecastSet, metric: Metric) -> Figure {
    let data = set
        .iter()
        .map(|leg| {
            let (kind, mode) = match metric.shape() {
                TraceShape::LinesWithMarkers => ("scatter", Some("lines+markers".to_string())),
                TraceShape::Bars => ("bar", None),
            };
            Trace {
                kind: kind.to_string(),
                mode,
                name: leg.city.clone(),
                x: leg.samples.iter().map(|s| s.timestamp.clone()).collect(),
                y: leg.samples.iter().map(|s| metric.value(s)).collect(),
            }
        })
        .collect();

    Figure {
        data,
        layout: Layout {
            title: format!("{metric} along the route"),
            xaxis: Axis {
                title: "Time".to_string(),
            },
            yaxis: Axis {
                title: metric.to_string(),
            },
            hovermode: "x unified".to_string(),
        },
    }
}
