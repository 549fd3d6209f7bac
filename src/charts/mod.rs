//! Charts module - Trace model and chart backends

mod backend;
mod plotly;
#[cfg(feature = "viewer")]
mod plotter;
mod renderer;
mod trace;

pub use backend::{BackendError, ChartBackend};
pub use plotly::{PlotlyPage, PLOTLY_CDN};
#[cfg(feature = "viewer")]
pub use plotter::ChartPlotter;
pub use renderer::StaticChartRenderer;
pub use trace::{build_traces, Axis, Layout, Marker, PlotOptions, Trace, PLOT_HEIGHT, PLOT_WIDTH};
