use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{ContrastAnchor, ImageFormat};

pub const DEFAULT_DIRECTORY: &str = "app-v1/public/images";
pub const DEFAULT_PREFIX: &str = "cloud-hero";
pub const DEFAULT_TARGET_WIDTH: u32 = 1080;
pub const DEFAULT_CONTRAST: f32 = 1.2;
pub const DEFAULT_BRIGHTNESS: f32 = 3.8;
pub const DEFAULT_BAKE_QUALITY: u8 = 85;
pub const DEFAULT_OPTIMIZE_QUALITY: u8 = 80;
/// libwebp `method`: 0 (fast) to 6 (slowest, smallest)
pub const DEFAULT_METHOD: u8 = 4;
pub const MAX_METHOD: u8 = 6;

/// Lossy WebP encoder knobs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EncodeSettings {
    /// 0-100
    pub quality: u8,
    /// Compression effort, 0-6
    pub method: u8,
}

impl EncodeSettings {
    pub fn validate(&self) -> Result<()> {
        if self.quality > 100 {
            return Err(Error::invalid("quality", self.quality));
        }
        if self.method > MAX_METHOD {
            return Err(Error::invalid("method", self.method));
        }
        Ok(())
    }
}

/// Parameters of the filter-bake pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BakeParams {
    pub contrast: f32,
    pub brightness: f32,
    pub anchor: ContrastAnchor,
    pub encode: EncodeSettings,
}

impl Default for BakeParams {
    fn default() -> Self {
        Self {
            contrast: DEFAULT_CONTRAST,
            brightness: DEFAULT_BRIGHTNESS,
            anchor: ContrastAnchor::Mean,
            encode: EncodeSettings {
                quality: DEFAULT_BAKE_QUALITY,
                method: DEFAULT_METHOD,
            },
        }
    }
}

impl BakeParams {
    pub fn validate(&self) -> Result<()> {
        validate_factor("contrast", self.contrast)?;
        validate_factor("brightness", self.brightness)?;
        self.encode.validate()
    }
}

/// Parameters of the resize-and-convert pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizeParams {
    /// Images wider than this are downsampled to it
    pub target_width: u32,
    pub output_format: ImageFormat,
    pub encode: EncodeSettings,
    /// If false, the source is deleted once the converted copy is written
    pub keep_original: bool,
}

impl Default for OptimizeParams {
    fn default() -> Self {
        Self {
            target_width: DEFAULT_TARGET_WIDTH,
            output_format: ImageFormat::Webp,
            encode: EncodeSettings {
                quality: DEFAULT_OPTIMIZE_QUALITY,
                method: DEFAULT_METHOD,
            },
            keep_original: false,
        }
    }
}

impl OptimizeParams {
    pub fn validate(&self) -> Result<()> {
        if self.target_width == 0 {
            return Err(Error::invalid("target_width", self.target_width));
        }
        if self.output_format != ImageFormat::Webp {
            return Err(Error::invalid("output_format", self.output_format));
        }
        self.encode.validate()
    }
}

fn validate_factor(arg: &'static str, value: f32) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::invalid(arg, value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(BakeParams::default().validate().is_ok());
        assert!(OptimizeParams::default().validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_values() {
        let mut bake = BakeParams::default();
        bake.encode.quality = 101;
        assert!(matches!(
            bake.validate(),
            Err(Error::InvalidArgument { arg: "quality", .. })
        ));

        let bake = BakeParams {
            brightness: 0.0,
            ..BakeParams::default()
        };
        assert!(matches!(
            bake.validate(),
            Err(Error::InvalidArgument { arg: "brightness", .. })
        ));

        let bake = BakeParams {
            contrast: -1.0,
            ..BakeParams::default()
        };
        assert!(matches!(
            bake.validate(),
            Err(Error::InvalidArgument { arg: "contrast", .. })
        ));

        let mut bake = BakeParams::default();
        bake.brightness = f32::NAN;
        assert!(matches!(
            bake.validate(),
            Err(Error::InvalidArgument { arg: "brightness", .. })
        ));

        let optimize = OptimizeParams {
            output_format: ImageFormat::Png,
            ..OptimizeParams::default()
        };
        assert!(matches!(
            optimize.validate(),
            Err(Error::InvalidArgument { arg: "output_format", .. })
        ));

        let mut optimize = OptimizeParams::default();
        optimize.encode.method = 7;
        assert!(optimize.validate().is_err());

        let optimize = OptimizeParams {
            target_width: 0,
            ..OptimizeParams::default()
        };
        assert!(matches!(
            optimize.validate(),
            Err(Error::InvalidArgument { arg: "target_width", .. })
        ));
    }
}
