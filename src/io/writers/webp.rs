use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::DynamicImage;
use tracing::debug;
use ::webp::{Encoder, WebPConfig};

use crate::core::params::EncodeSettings;
use crate::error::{Error, Result};

/// Encode `image` as lossy WebP. RGBA is kept when the source has alpha.
pub fn encode_webp(image: &DynamicImage, settings: &EncodeSettings) -> Result<Vec<u8>> {
    settings.validate()?;

    let mut config = WebPConfig::new().map_err(|_| Error::Encode {
        path: Default::default(),
        reason: "failed to initialise libwebp config".to_string(),
    })?;
    config.lossless = 0;
    config.quality = f32::from(settings.quality);
    config.method = i32::from(settings.method);

    let (width, height) = (image.width(), image.height());
    let encoded = if image.color().has_alpha() {
        let rgba = image.to_rgba8();
        let encoder = Encoder::from_rgba(rgba.as_raw(), width, height);
        encoder.encode_advanced(&config)
    } else {
        let rgb = image.to_rgb8();
        let encoder = Encoder::from_rgb(rgb.as_raw(), width, height);
        encoder.encode_advanced(&config)
    };
    let memory = encoded.map_err(|e| Error::Encode {
        path: Default::default(),
        reason: format!("{e:?}"),
    })?;

    debug!(
        "Encoded {}x{} WebP at q{} m{}: {} bytes",
        width,
        height,
        settings.quality,
        settings.method,
        memory.len()
    );
    Ok(memory.to_vec())
}

/// Encode and write `image` to `output`, returning the number of bytes written.
pub fn write_webp(output: &Path, image: &DynamicImage, settings: &EncodeSettings) -> Result<u64> {
    let bytes = encode_webp(image, settings).map_err(|e| with_path(e, output))?;
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(bytes.len() as u64)
}

/// Encode `image` and atomically replace `output` with it.
///
/// The bytes land in a temporary file in the same directory first, so a failed
/// encode or write leaves the existing file untouched. An existing file's
/// permissions carry over to the replacement.
pub fn replace_with_webp(
    output: &Path,
    image: &DynamicImage,
    settings: &EncodeSettings,
) -> Result<u64> {
    let bytes = encode_webp(image, settings).map_err(|e| with_path(e, output))?;
    let dir = match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(&bytes)?;
    tmp.flush()?;
    // Temp files are created 0600; keep the mode of the file being replaced
    if let Ok(existing) = std::fs::metadata(output) {
        tmp.as_file().set_permissions(existing.permissions())?;
    }
    tmp.persist(output).map_err(|e| Error::Io(e.error))?;
    Ok(bytes.len() as u64)
}

fn with_path(err: Error, path: &Path) -> Error {
    match err {
        Error::Encode { reason, .. } => Error::Encode {
            path: path.to_path_buf(),
            reason,
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn settings() -> EncodeSettings {
        EncodeSettings {
            quality: 85,
            method: 4,
        }
    }

    #[test]
    fn encodes_riff_webp_container() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(16, 16, Rgba([50, 50, 50, 200])));
        let bytes = encode_webp(&img, &settings()).unwrap();
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WEBP");
    }

    #[test]
    fn rejects_invalid_settings() {
        let img = DynamicImage::new_rgb8(4, 4);
        let bad = EncodeSettings {
            quality: 120,
            method: 4,
        };
        assert!(matches!(
            encode_webp(&img, &bad),
            Err(Error::InvalidArgument { arg: "quality", .. })
        ));
    }

    #[test]
    fn replace_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.webp");
        std::fs::write(&path, b"old").unwrap();
        let img = DynamicImage::new_rgb8(8, 8);
        let written = replace_with_webp(&path, &img, &settings()).unwrap();
        let on_disk = std::fs::read(&path).unwrap();
        assert_eq!(on_disk.len() as u64, written);
        assert_eq!(&on_disk[0..4], b"RIFF");
    }
}
