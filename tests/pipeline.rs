// Purpose: Image folder -> histogram payload -> page -> chart backends.

use hist_graph::charts::{PlotlyPage, StaticChartRenderer};
use hist_graph::data::{calculate_histogram, ImageLoader, BINS};
use hist_graph::{render_histogram, HistogramData, MountPoints, StaticPage};
use image::{Rgb, RgbImage};
use serde_json::Value;

fn image_folder() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let img = RgbImage::from_fn(16, 16, |x, y| Rgb([(x * 16) as u8, (y * 16) as u8, 200]));
    img.save(dir.path().join("gradient.png")).unwrap();
    std::fs::write(dir.path().join("readme.txt"), b"not an image").unwrap();
    dir
}

#[test]
fn image_histogram_renders_as_plotly_page() {
    let dir = image_folder();
    let loader = ImageLoader::new(dir.path());
    assert_eq!(loader.list_images().unwrap(), vec!["gradient.png"]);

    let payload = calculate_histogram(&loader.resolve("gradient.png").unwrap()).unwrap();
    let data = HistogramData::decode(&payload).unwrap();
    for channel in [&data.red, &data.green, &data.blue] {
        match channel {
            Some(Value::Array(bins)) => assert_eq!(bins.len(), BINS),
            other => panic!("expected 256 bins, got {other:?}"),
        }
    }

    let mounts = MountPoints::default();
    let page = StaticPage::histogram_output(&mounts, payload);
    let mut backend = PlotlyPage::new("Histogram: gradient.png");
    render_histogram(&page, &mounts, &mut backend).unwrap();

    let html = backend.document().unwrap();
    assert!(html.contains("<title>Histogram: gradient.png</title>"));
    assert!(html.contains("Plotly.newPlot(\"hist_graph\""));
    assert!(html.contains("\"name\":\"Red\""));
    assert!(html.contains("\"name\":\"Green\""));
    assert!(html.contains("\"name\":\"Blue\""));

    let out = dir.path().join("hist_graph.html");
    backend.write_to(&out).unwrap();
    assert!(std::fs::metadata(&out).unwrap().len() > 0);
}

#[test]
fn image_histogram_renders_as_png() {
    let dir = image_folder();
    let loader = ImageLoader::new(dir.path());
    let payload = calculate_histogram(&loader.resolve("gradient.png").unwrap()).unwrap();

    let mounts = MountPoints::default();
    let page = StaticPage::histogram_output(&mounts, payload);
    let mut backend = StaticChartRenderer::new();
    render_histogram(&page, &mounts, &mut backend).unwrap();

    let image = backend.image().unwrap();
    assert_eq!(image.dimensions(), (600, 400));
    assert!(image.pixels().any(|p| p.0 != [255, 255, 255]), "lines should be drawn");

    let out = dir.path().join("hist_graph.png");
    backend.save(&out).unwrap();
    let reloaded = image::open(&out).unwrap().to_rgb8();
    assert_eq!(reloaded.dimensions(), (600, 400));
}
