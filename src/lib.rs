//! hist_graph - RGB histogram extraction & channel curve rendering
//!
//! Computes per-channel intensity histograms of images and draws them as three
//! line traces through a pluggable chart backend.

pub mod charts;
pub mod config;
pub mod data;
pub mod error;
#[cfg(feature = "viewer")]
pub mod gui;
pub mod page;
pub mod render;

pub use charts::{ChartBackend, Layout, PlotOptions, Trace};
pub use data::{Channel, HistogramData};
pub use error::RenderError;
pub use page::{PageAccessor, StaticPage};
pub use render::{render_histogram, render_payload, MountPoints};
