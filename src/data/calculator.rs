//! Histogram Calculator Module
//! Counts per-channel pixel intensities of an image into 256 bins.

use crate::data::histogram::{Channel, HistogramData};
use crate::data::loader::ImageError;
use image::RgbImage;
use rayon::prelude::*;
use std::path::Path;
use tracing::debug;

/// Number of intensity levels of an 8-bit channel.
pub const BINS: usize = 256;

/// Pixels handed to one rayon task.
const CHUNK_PIXELS: usize = 64 * 1024;

/// Raw bin counts for the three channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelCounts {
    counts: [[u64; BINS]; 3],
}

impl Default for ChannelCounts {
    fn default() -> Self {
        Self {
            counts: [[0; BINS]; 3],
        }
    }
}

impl ChannelCounts {
    pub fn bins(&self, channel: Channel) -> &[u64; BINS] {
        &self.counts[channel.pixel_index()]
    }

    /// Total number of pixels counted.
    pub fn pixel_count(&self) -> u64 {
        self.counts[0].iter().sum()
    }

    fn merge(mut self, other: Self) -> Self {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts.iter()) {
            for (a, b) in mine.iter_mut().zip(theirs.iter()) {
                *a += b;
            }
        }
        self
    }

    /// Convert to the JSON payload; counts are emitted as floats.
    pub fn to_histogram(&self) -> HistogramData {
        let series = |channel| {
            self.bins(channel)
                .iter()
                .map(|&c| c as f64)
                .collect::<Vec<f64>>()
        };
        HistogramData::from_samples(
            series(Channel::Red),
            series(Channel::Green),
            series(Channel::Blue),
        )
    }
}

/// Computes RGB histograms with multi-threading support.
pub struct HistogramCalculator;

impl HistogramCalculator {
    /// Count every pixel of an RGB image.
    pub fn from_image(image: &RgbImage) -> ChannelCounts {
        image
            .as_raw()
            .par_chunks(CHUNK_PIXELS * 3)
            .fold(ChannelCounts::default, |mut acc, chunk| {
                for px in chunk.chunks_exact(3) {
                    for (channel, &value) in px.iter().enumerate() {
                        acc.counts[channel][value as usize] += 1;
                    }
                }
                acc
            })
            .reduce(ChannelCounts::default, ChannelCounts::merge)
    }

    /// Decode an image file and count its pixels.
    ///
    /// Any format the `image` crate understands is accepted; alpha is dropped
    /// and grayscale is replicated over the three channels.
    pub fn from_path(path: &Path) -> Result<ChannelCounts, ImageError> {
        let image = image::open(path)
            .map_err(|source| ImageError::Decode {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgb8();
        debug!(
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            "computing channel histogram"
        );
        Ok(Self::from_image(&image))
    }
}

/// Histogram of the image at `path`, serialized as the page attribute value.
pub fn calculate_histogram(path: &Path) -> Result<String, ImageError> {
    let counts = HistogramCalculator::from_path(path)?;
    counts
        .to_histogram()
        .encode()
        .map_err(|e| ImageError::Encode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use serde_json::Value;

    fn bin(data: &HistogramData, channel: Channel, idx: usize) -> f64 {
        match data.channel(channel) {
            Some(Value::Array(items)) => items[idx].as_f64().unwrap(),
            other => panic!("unexpected channel value {other:?}"),
        }
    }

    #[test]
    fn counts_each_channel_independently() {
        let mut img = RgbImage::from_pixel(4, 2, Rgb([10, 20, 30]));
        img.put_pixel(0, 0, Rgb([255, 0, 30]));

        let counts = HistogramCalculator::from_image(&img);
        assert_eq!(counts.pixel_count(), 8);
        assert_eq!(counts.bins(Channel::Red)[10], 7);
        assert_eq!(counts.bins(Channel::Red)[255], 1);
        assert_eq!(counts.bins(Channel::Green)[20], 7);
        assert_eq!(counts.bins(Channel::Green)[0], 1);
        assert_eq!(counts.bins(Channel::Blue)[30], 8);
    }

    #[test]
    fn large_images_are_split_and_merged() {
        let side = 300;
        let img = RgbImage::from_fn(side, side, |x, _| Rgb([(x % 256) as u8, 7, 255]));
        let counts = HistogramCalculator::from_image(&img);

        assert_eq!(counts.pixel_count(), (side * side) as u64);
        assert_eq!(counts.bins(Channel::Green)[7], (side * side) as u64);
        assert_eq!(counts.bins(Channel::Blue)[255], (side * side) as u64);
        // x in 0..300 hits bins 0..44 twice
        assert_eq!(counts.bins(Channel::Red)[0], 2 * side as u64);
        assert_eq!(counts.bins(Channel::Red)[100], side as u64);
    }

    #[test]
    fn payload_has_256_float_bins_per_channel() {
        let img = RgbImage::from_pixel(3, 3, Rgb([1, 2, 3]));
        let data = HistogramCalculator::from_image(&img).to_histogram();

        for channel in Channel::ALL {
            match data.channel(channel) {
                Some(Value::Array(items)) => assert_eq!(items.len(), BINS),
                other => panic!("unexpected channel value {other:?}"),
            }
        }
        assert_eq!(bin(&data, Channel::Red, 1), 9.0);
        assert_eq!(bin(&data, Channel::Green, 2), 9.0);
        assert_eq!(bin(&data, Channel::Blue, 3), 9.0);
        assert_eq!(bin(&data, Channel::Blue, 4), 0.0);
    }

    #[test]
    fn calculate_histogram_reads_png_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tile.png");
        RgbImage::from_pixel(2, 2, Rgb([0, 128, 255]))
            .save(&path)
            .unwrap();

        let raw = calculate_histogram(&path).unwrap();
        let data = HistogramData::decode(&raw).unwrap();
        assert_eq!(bin(&data, Channel::Red, 0), 4.0);
        assert_eq!(bin(&data, Channel::Green, 128), 4.0);
        assert_eq!(bin(&data, Channel::Blue, 255), 4.0);
    }

    #[test]
    fn unreadable_file_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not an image").unwrap();

        let err = HistogramCalculator::from_path(&path).unwrap_err();
        assert!(matches!(err, ImageError::Decode { .. }));
    }
}
