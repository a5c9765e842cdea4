//! Discovery of source images in a directory

use crate::io::configuration::SUPPORTED_EXTENSIONS;
use crate::io::error::{CollageError, Result};
use std::path::{Path, PathBuf};

/// Whether `path` has one of the supported image extensions, ignoring case
///
/// The extension is compared as raw bytes, so file names that are not valid
/// UTF-8 elsewhere are still accepted.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension().is_some_and(|ext| {
        SUPPORTED_EXTENSIONS
            .iter()
            .any(|supported| ext.as_encoded_bytes().eq_ignore_ascii_case(supported.as_bytes()))
    })
}

/// List the supported image files directly inside `directory`, sorted by path
///
/// Subdirectories are not descended into.
///
/// # Errors
///
/// Returns an error if the directory does not exist or cannot be read
pub fn collect_images(directory: &Path) -> Result<Vec<PathBuf>> {
    let read_error = |e: std::io::Error| CollageError::FileSystem {
        path: directory.to_path_buf(),
        operation: "read directory",
        source: e,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(directory).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        if path.is_file() && is_supported_image(&path) {
            files.push(path);
        }
    }
    files.sort();

    log::debug!(
        "Collected {} images from '{}'",
        files.len(),
        directory.display()
    );
    Ok(files)
}
