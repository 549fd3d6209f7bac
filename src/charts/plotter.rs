//! Chart Plotter Module
//! Draws channel traces with egui_plot for the native viewer.

use crate::charts::{Layout, Trace};
use egui::Color32;
use egui_plot::{Legend, Line, Plot, PlotPoints};

/// Creates the static histogram plot using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    pub fn channel_color(trace: &Trace) -> Color32 {
        let [r, g, b] = trace.channel.rgb();
        Color32::from_rgb(r, g, b)
    }

    /// Draw the traces as plain lines.
    ///
    /// Tick labels and legend follow `layout`; hover readout and navigation
    /// are always off so the chart stays static.
    pub fn draw_traces(ui: &mut egui::Ui, id: &str, traces: &[Trace], layout: &Layout) {
        let mut plot = Plot::new(id)
            .width(layout.width as f32)
            .height(layout.height as f32)
            .show_axes([layout.xaxis.showticklabels, layout.yaxis.showticklabels])
            .show_x(false)
            .show_y(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false);
        if layout.showlegend {
            plot = plot.legend(Legend::default());
        }

        plot.show(ui, |plot_ui| {
            for trace in traces {
                let points: Vec<[f64; 2]> =
                    trace.points().into_iter().map(|(x, y)| [x, y]).collect();
                if points.is_empty() {
                    continue;
                }
                plot_ui.line(
                    Line::new(PlotPoints::from(points))
                        .color(Self::channel_color(trace))
                        .width(1.5)
                        .name(trace.name),
                );
            }
        });
    }
}
