//! Native Chart Window
//! Chart backend that shows the plot in its own window.

use crate::charts::{BackendError, ChartBackend, Layout, PlotOptions, Trace};
use crate::gui::app::{HistogramApp, ViewerContent};
use eframe::egui;
use tracing::info;

/// Opens a blocking native window per render call.
pub struct HistogramWindow {
    title: String,
}

impl HistogramWindow {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    fn run(&self, width: u32, height: u32, content: ViewerContent) -> Result<(), BackendError> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([width as f32, height as f32])
                .with_resizable(false)
                .with_title(&self.title),
            ..Default::default()
        };

        info!(title = %self.title, "opening histogram window");
        eframe::run_native(
            &self.title,
            options,
            Box::new(move |_cc| Ok(Box::new(HistogramApp::new(content)))),
        )
        .map_err(|e| BackendError::new(format!("viewer window: {e}")))
    }
}

impl ChartBackend for HistogramWindow {
    fn new_plot(
        &mut self,
        target: &str,
        traces: &[Trace],
        layout: &Layout,
        _options: &PlotOptions,
    ) -> Result<(), BackendError> {
        // The window has no modebar, so the options carry nothing to apply.
        self.run(
            layout.width,
            layout.height,
            ViewerContent::Chart {
                id: target.to_string(),
                traces: traces.to_vec(),
                layout: layout.clone(),
            },
        )
    }

    fn placeholder(&mut self, _target: &str, message: &str) -> Result<(), BackendError> {
        let layout = Layout::default();
        self.run(
            layout.width,
            layout.height,
            ViewerContent::Error(message.to_string()),
        )
    }
}
