//! Histogram Renderer
//! Reads the histogram payload off the page and draws it into the mount element.

use crate::charts::{build_traces, ChartBackend, Layout, PlotOptions};
use crate::data::{HistogramData, PayloadError};
use crate::error::{RenderError, Result};
use crate::page::PageAccessor;
use tracing::{debug, info};

pub const DATA_ELEMENT: &str = "makeGraph";
pub const DATA_ATTRIBUTE: &str = "histogram_values";
pub const RENDER_TARGET: &str = "hist_graph";

/// Where the payload is read from and where the chart goes.
///
/// The data-source element and the render target are different elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountPoints {
    pub data_element: String,
    pub data_attribute: String,
    pub render_target: String,
}

impl Default for MountPoints {
    fn default() -> Self {
        Self {
            data_element: DATA_ELEMENT.to_string(),
            data_attribute: DATA_ATTRIBUTE.to_string(),
            render_target: RENDER_TARGET.to_string(),
        }
    }
}

impl MountPoints {
    /// Fails when the chart would be drawn into the element carrying the data.
    pub fn check(&self) -> Result<()> {
        if self.data_element == self.render_target {
            return Err(RenderError::MountConflict(self.render_target.clone()));
        }
        Ok(())
    }
}

/// Render the histogram embedded in `page`.
///
/// Every check runs before the backend is touched, so on error nothing has
/// been drawn.
pub fn render_histogram<P, B>(page: &P, mounts: &MountPoints, backend: &mut B) -> Result<()>
where
    P: PageAccessor + ?Sized,
    B: ChartBackend + ?Sized,
{
    mounts.check()?;
    if !page.has_element(&mounts.data_element) {
        return Err(RenderError::MissingElement(mounts.data_element.clone()));
    }
    let raw = page
        .get_attribute(&mounts.data_element, &mounts.data_attribute)
        .ok_or_else(|| PayloadError::MissingAttribute {
            element: mounts.data_element.clone(),
            attribute: mounts.data_attribute.clone(),
        })?;
    let data = HistogramData::decode(&raw)?;

    if !page.has_element(&mounts.render_target) {
        return Err(RenderError::MissingElement(mounts.render_target.clone()));
    }
    draw(&data, &mounts.render_target, backend)
}

/// Render a raw payload string into `target`.
pub fn render_payload<B>(raw: &str, target: &str, backend: &mut B) -> Result<()>
where
    B: ChartBackend + ?Sized,
{
    let data = HistogramData::decode(raw)?;
    draw(&data, target, backend)
}

fn draw<B>(data: &HistogramData, target: &str, backend: &mut B) -> Result<()>
where
    B: ChartBackend + ?Sized,
{
    let traces = build_traces(data);
    debug!(
        mount = target,
        absent = traces.iter().filter(|t| t.y.is_none()).count(),
        "built channel traces"
    );

    backend.new_plot(target, &traces, &Layout::default(), &PlotOptions::default())?;
    info!(mount = target, "histogram rendered");
    Ok(())
}
