//! Data module - Histogram payloads, image loading and histogram calculation

pub mod calculator;
pub mod histogram;
pub mod loader;

pub use calculator::{calculate_histogram, ChannelCounts, HistogramCalculator, BINS};
pub use histogram::{Channel, HistogramData, PayloadError};
pub use loader::{ImageError, ImageLoader};
