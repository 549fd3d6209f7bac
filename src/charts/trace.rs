//! Chart Model
//! Trace descriptors and the fixed plot layout handed to a chart backend.
//!
//! The serialized shapes follow plotly.js argument conventions, so the same
//! values can be embedded directly in a `Plotly.newPlot` call.

use crate::data::{Channel, HistogramData};
use serde::Serialize;
use serde_json::Value;

pub const PLOT_WIDTH: u32 = 600;
pub const PLOT_HEIGHT: u32 = 400;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub color: &'static str,
}

/// One plotted series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Value>,
    pub mode: &'static str,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub marker: Marker,
    pub hoverinfo: &'static str,
    #[serde(skip)]
    pub channel: Channel,
}

impl Trace {
    /// Line trace for one channel; `y` is forwarded as given.
    pub fn for_channel(channel: Channel, y: Option<Value>) -> Self {
        Self {
            y,
            mode: "lines",
            name: channel.label(),
            kind: "scatter",
            marker: Marker {
                color: channel.css_color(),
            },
            hoverinfo: "skip",
            channel,
        }
    }

    /// Plottable `(index, value)` pairs of `y`.
    ///
    /// Entries that are not numbers leave a gap in the index sequence rather
    /// than shifting the following samples.
    pub fn points(&self) -> Vec<(f64, f64)> {
        match &self.y {
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .filter_map(|(i, v)| v.as_f64().map(|y| (i as f64, y)))
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Red, green and blue traces, in that order.
pub fn build_traces(data: &HistogramData) -> Vec<Trace> {
    Channel::ALL
        .iter()
        .map(|&channel| Trace::for_channel(channel, data.channel(channel).cloned()))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub showticklabels: bool,
}

/// Plot region configuration; identical for every render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub width: u32,
    pub height: u32,
    pub showlegend: bool,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            xaxis: Axis {
                showticklabels: false,
            },
            yaxis: Axis {
                showticklabels: false,
            },
            width: PLOT_WIDTH,
            height: PLOT_HEIGHT,
            showlegend: false,
        }
    }
}

/// UI chrome options passed alongside the layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotOptions {
    pub display_mode_bar: bool,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            display_mode_bar: false,
        }
    }
}
