//! Chart Backend
//! The charting capability the renderer draws through.

use crate::charts::{Layout, PlotOptions, Trace};
use thiserror::Error;

/// Failure reported by a chart backend.
#[derive(Error, Debug)]
#[error("{0}")]
pub struct BackendError(pub String);

impl BackendError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Something that can draw a set of traces into a named container.
pub trait ChartBackend {
    /// Draw `traces` into the container `target`, replacing its content.
    fn new_plot(
        &mut self,
        target: &str,
        traces: &[Trace],
        layout: &Layout,
        options: &PlotOptions,
    ) -> Result<(), BackendError>;

    /// Show a visible error state in `target` instead of a chart.
    ///
    /// Backends without a way to display text leave the container empty.
    fn placeholder(&mut self, _target: &str, _message: &str) -> Result<(), BackendError> {
        Ok(())
    }
}
