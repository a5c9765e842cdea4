//! Collage export with format detection and JPEG quality control

use crate::io::error::{CollageError, Result, invalid_parameter};
use image::codecs::jpeg::JpegEncoder;
use image::{ImageFormat, RgbImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Output format chosen from the file extension
///
/// # Errors
///
/// Returns an error if the extension is missing or not a writable image format
pub fn output_format(path: &Path) -> Result<ImageFormat> {
    let format = ImageFormat::from_path(path)
        .map_err(|e| invalid_parameter("output", &path.display(), &e))?;
    if !format.writing_enabled() {
        return Err(invalid_parameter(
            "output",
            &path.display(),
            &format!("writing {format:?} images is not supported"),
        ));
    }
    Ok(format)
}

/// Save the collage to `path`
///
/// JPEG output is encoded with `quality`; other formats ignore it.
///
/// # Errors
///
/// Returns an error if:
/// - The extension does not name a writable image format
/// - The parent directory cannot be created
/// - The file cannot be created, encoded or flushed
pub fn save_collage(image: &RgbImage, path: &Path, quality: u8) -> Result<()> {
    let format = output_format(path)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CollageError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let export_error = |e: image::ImageError| CollageError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    };

    if format == ImageFormat::Jpeg {
        let file = File::create(path).map_err(|e| CollageError::FileSystem {
            path: path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;
        let mut writer = BufWriter::new(file);
        image
            .write_with_encoder(JpegEncoder::new_with_quality(&mut writer, quality))
            .map_err(export_error)?;
        writer.flush().map_err(|e| CollageError::FileSystem {
            path: path.to_path_buf(),
            operation: "flush file",
            source: e,
        })?;
    } else {
        image.save_with_format(path, format).map_err(export_error)?;
    }

    log::debug!(
        "Wrote {}x{} {format:?} collage to '{}'",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}
