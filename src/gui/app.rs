//! Histogram Viewer Application
//! Single fixed-size window showing the channel curves.

use crate::charts::{ChartPlotter, Layout, Trace};
use egui::{Color32, RichText};

/// What the window displays.
pub enum ViewerContent {
    Chart {
        id: String,
        traces: Vec<Trace>,
        layout: Layout,
    },
    Error(String),
}

/// Main application window.
pub struct HistogramApp {
    content: ViewerContent,
}

impl HistogramApp {
    pub fn new(content: ViewerContent) -> Self {
        Self { content }
    }
}

impl eframe::App for HistogramApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::WHITE))
            .show(ctx, |ui| match &self.content {
                ViewerContent::Chart { id, traces, layout } => {
                    ChartPlotter::draw_traces(ui, id, traces, layout);
                }
                ViewerContent::Error(message) => {
                    ui.centered_and_justified(|ui| {
                        ui.label(
                            RichText::new(format!("Histogram unavailable: {message}"))
                                .size(16.0)
                                .color(Color32::from_rgb(156, 0, 6)),
                        );
                    });
                }
            });
    }
}
