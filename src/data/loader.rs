//! Image Loader Module
//! Lists the images of the configured folder and resolves image ids to paths.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// File extensions treated as images.
pub const IMAGE_EXTENSIONS: [&str; 8] = ["png", "jpg", "jpeg", "bmp", "gif", "tif", "tiff", "webp"];

#[derive(Error, Debug)]
pub enum ImageError {
    #[error("Invalid image id: {0}")]
    InvalidId(String),
    #[error("Image not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to read image folder {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("Failed to encode histogram: {0}")]
    Encode(String),
}

/// Handles access to the image folder.
pub struct ImageLoader {
    folder: PathBuf,
}

impl ImageLoader {
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
        }
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Sorted file names of every image in the folder.
    pub fn list_images(&self) -> Result<Vec<String>, ImageError> {
        let entries = std::fs::read_dir(&self.folder).map_err(|source| ImageError::Io {
            path: self.folder.clone(),
            source,
        })?;

        let mut images: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| is_image_name(name))
            .collect();
        images.sort();
        Ok(images)
    }

    /// Path of `image_id` inside the folder.
    ///
    /// Ids are bare file names; anything that could leave the folder is refused.
    pub fn resolve(&self, image_id: &str) -> Result<PathBuf, ImageError> {
        if image_id.is_empty()
            || image_id == "."
            || image_id == ".."
            || image_id.contains(['/', '\\'])
        {
            return Err(ImageError::InvalidId(image_id.to_string()));
        }

        let path = self.folder.join(image_id);
        if !path.is_file() {
            return Err(ImageError::NotFound(path));
        }
        Ok(path)
    }
}

fn is_image_name(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn folder_with(files: &[&str]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for name in files {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        dir
    }

    #[test]
    fn lists_only_images_sorted() {
        let dir = folder_with(&["b.JPG", "a.png", "notes.txt", "c.webp", "noext"]);
        fs::create_dir(dir.path().join("d.png")).unwrap();

        let loader = ImageLoader::new(dir.path());
        assert_eq!(loader.list_images().unwrap(), vec!["a.png", "b.JPG", "c.webp"]);
    }

    #[test]
    fn missing_folder_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let loader = ImageLoader::new(dir.path().join("nope"));
        assert!(matches!(loader.list_images(), Err(ImageError::Io { .. })));
    }

    #[test]
    fn resolve_finds_existing_image() {
        let dir = folder_with(&["cat.png"]);
        let loader = ImageLoader::new(dir.path());
        assert_eq!(loader.resolve("cat.png").unwrap(), dir.path().join("cat.png"));
        assert!(matches!(loader.resolve("dog.png"), Err(ImageError::NotFound(_))));
    }

    #[test]
    fn resolve_rejects_paths() {
        let dir = folder_with(&["cat.png"]);
        let loader = ImageLoader::new(dir.path());
        for id in ["", "..", "../cat.png", "sub/cat.png", "sub\\cat.png"] {
            assert!(
                matches!(loader.resolve(id), Err(ImageError::InvalidId(_))),
                "{id:?} should be rejected"
            );
        }
    }
}
