//! Static Chart Renderer
//! Draws the channel traces into a PNG-ready bitmap with plotters.
//!
//! Layout mirrors the interactive chart: fixed size, white background, no tick
//! labels and no legend, so no text is ever drawn.

use crate::charts::{BackendError, ChartBackend, Layout, PlotOptions, Trace};
use image::{Rgb, RgbImage};
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;
use tracing::{debug, info};

const MARGIN: u32 = 20;
const LINE_WIDTH: u32 = 2;
const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Chart backend producing a bitmap per render.
#[derive(Debug, Default)]
pub struct StaticChartRenderer {
    image: Option<RgbImage>,
}

impl StaticChartRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bitmap of the last render.
    pub fn image(&self) -> Option<&RgbImage> {
        self.image.as_ref()
    }

    pub fn save(&self, path: &Path) -> Result<(), BackendError> {
        let image = self
            .image
            .as_ref()
            .ok_or_else(|| BackendError::new("nothing has been rendered yet"))?;
        image
            .save(path)
            .map_err(|e| BackendError::new(format!("saving {}: {e}", path.display())))?;
        info!(path = %path.display(), "wrote histogram image");
        Ok(())
    }

    fn draw(traces: &[Trace], width: u32, height: u32) -> Result<RgbImage, BackendError> {
        let series: Vec<(Vec<(f64, f64)>, [u8; 3])> = traces
            .iter()
            .map(|trace| (trace.points(), trace.channel.rgb()))
            .collect();
        let (x_range, y_range) = Self::get_ranges(series.iter().map(|(points, _)| points));
        debug!(?x_range, ?y_range, "static chart ranges");

        let mut buffer = vec![0u8; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            root.fill(&WHITE).map_err(draw_failed)?;

            let mut chart = ChartBuilder::on(&root)
                .margin(MARGIN)
                .build_cartesian_2d(x_range, y_range)
                .map_err(draw_failed)?;

            for (points, [r, g, b]) in series {
                if points.is_empty() {
                    continue;
                }
                chart
                    .draw_series(LineSeries::new(
                        points,
                        RGBColor(r, g, b).stroke_width(LINE_WIDTH),
                    ))
                    .map_err(draw_failed)?;
            }

            root.present().map_err(draw_failed)?;
        }

        RgbImage::from_raw(width, height, buffer)
            .ok_or_else(|| BackendError::new("bitmap size mismatch"))
    }

    /// Data ranges over all traces, padded so lines do not touch the border.
    fn get_ranges<'a>(
        series: impl Iterator<Item = &'a Vec<(f64, f64)>>,
    ) -> (Range<f64>, Range<f64>) {
        let mut x_max = 0.0f64;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for &(x, y) in series.flatten() {
            if !y.is_finite() {
                continue;
            }
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }

        if y_min.is_infinite() {
            return (0.0..1.0, 0.0..1.0);
        }
        let pad = if y_max > y_min {
            (y_max - y_min) * 0.05
        } else {
            1.0
        };
        (0.0..x_max.max(1.0), (y_min - pad)..(y_max + pad))
    }
}

impl ChartBackend for StaticChartRenderer {
    fn new_plot(
        &mut self,
        target: &str,
        traces: &[Trace],
        layout: &Layout,
        _options: &PlotOptions,
    ) -> Result<(), BackendError> {
        debug!(mount = target, traces = traces.len(), "rendering static chart");
        self.image = Some(Self::draw(traces, layout.width, layout.height)?);
        Ok(())
    }

    fn placeholder(&mut self, _target: &str, _message: &str) -> Result<(), BackendError> {
        let layout = Layout::default();
        self.image = Some(RgbImage::from_pixel(layout.width, layout.height, BACKGROUND));
        Ok(())
    }
}

fn draw_failed<E: std::fmt::Display>(e: E) -> BackendError {
    BackendError::new(format!("drawing chart: {e}"))
}
