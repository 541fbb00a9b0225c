use std::path::Path;

use image::DynamicImage;
use tracing::debug;

use crate::error::{Error, Result};

/// Decode the image at `path`; the format is sniffed from its contents.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let img = image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(|source| Error::Decode {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(
        "Decoded {:?}: {}x{} {:?}",
        path,
        img.width(),
        img.height(),
        img.color()
    );
    Ok(img)
}

/// File size in KiB, as reported in the per-file conversion line.
pub fn file_size_kib(path: &Path) -> Result<f64> {
    Ok(std::fs::metadata(path)?.len() as f64 / 1024.0)
}
