//! GUI module - Native histogram window

mod app;
mod chart_viewer;

pub use app::{HistogramApp, ViewerContent};
pub use chart_viewer::HistogramWindow;
