//! Decoding of source images referenced by placements

use crate::io::error::{CollageError, Result};
use image::DynamicImage;
use std::path::{Path, PathBuf};

/// Resolves a source reference to decoded pixels
pub trait ImageLoader<T> {
    /// Decode the image behind `source`
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or decoded
    fn load(&self, source: &T) -> Result<DynamicImage>;

    /// Short human-readable name for log messages
    fn describe(&self, source: &T) -> String;
}

/// Loads images from paths on disk
#[derive(Debug, Clone, Copy, Default)]
pub struct FileLoader;

impl FileLoader {
    fn open(path: &Path) -> Result<DynamicImage> {
        image::open(path).map_err(|e| CollageError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

impl ImageLoader<PathBuf> for FileLoader {
    fn load(&self, source: &PathBuf) -> Result<DynamicImage> {
        Self::open(source)
    }

    fn describe(&self, source: &PathBuf) -> String {
        source.file_name().map_or_else(
            || source.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
    }
}
