//! hist-graph - RGB histogram viewer
//!
//! Computes the channel histogram of an image (or takes a ready payload),
//! embeds it in a page and renders the three channel curves.

use anyhow::{bail, Context};
use clap::Parser;
use hist_graph::charts::{ChartBackend, PlotlyPage, StaticChartRenderer};
use hist_graph::config::{BackendKind, Config};
use hist_graph::data::{calculate_histogram, ImageLoader};
use hist_graph::{render_histogram, MountPoints, RenderError, StaticPage};
use std::path::Path;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hist_graph=info".into()),
        )
        .init();

    let config = Config::parse();
    let loader = ImageLoader::new(&config.image_folder);

    if config.list {
        for name in loader.list_images()? {
            println!("{name}");
        }
        return Ok(());
    }

    let payload = match (&config.payload, &config.image_id) {
        (Some(payload), _) => payload.clone(),
        (None, Some(image_id)) => {
            let path = loader.resolve(image_id)?;
            info!(image = %path.display(), "calculating histogram");
            calculate_histogram(&path)?
        }
        (None, None) => bail!("either an image id or --payload is required"),
    };
    let title = match &config.image_id {
        Some(image_id) => format!("Histogram: {image_id}"),
        None => "Histogram".to_string(),
    };

    let mounts = config.mount_points();
    let page = StaticPage::histogram_output(&mounts, payload);
    let output = config.output_path();

    let outcome = match config.backend {
        BackendKind::Html => {
            let mut backend = PlotlyPage::new(title);
            let outcome = render_or_placeholder(&page, &mounts, &mut backend);
            let path = output.context("html backend needs an output path")?;
            backend.write_to(&path)?;
            open_output(&config, &path)?;
            outcome
        }
        BackendKind::Png => {
            let mut backend = StaticChartRenderer::new();
            let outcome = render_or_placeholder(&page, &mounts, &mut backend);
            let path = output.context("png backend needs an output path")?;
            backend.save(&path)?;
            open_output(&config, &path)?;
            outcome
        }
        #[cfg(feature = "viewer")]
        BackendKind::Window => {
            let mut backend = hist_graph::gui::HistogramWindow::new(title);
            render_or_placeholder(&page, &mounts, &mut backend)
        }
        #[cfg(not(feature = "viewer"))]
        BackendKind::Window => bail!("built without the `viewer` feature"),
    };

    outcome.context("rendering histogram")
}

/// Render, falling back to the backend's error state on failure.
fn render_or_placeholder<B: ChartBackend>(
    page: &StaticPage,
    mounts: &MountPoints,
    backend: &mut B,
) -> Result<(), RenderError> {
    let result = render_histogram(page, mounts, backend);
    if let Err(err) = &result {
        error!(%err, "histogram render failed");
        if let Err(placeholder_err) = backend.placeholder(&mounts.render_target, &err.to_string())
        {
            warn!(%placeholder_err, "could not show error placeholder");
        }
    }
    result
}

fn open_output(config: &Config, path: &Path) -> anyhow::Result<()> {
    if config.open {
        open::that(path).with_context(|| format!("opening {}", path.display()))?;
    }
    Ok(())
}
