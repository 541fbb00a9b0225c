//! Shared types and enums used across cloudbake.
//! Includes `ImageFormat`, `ContrastAnchor` and the per-file `FileStatus`.
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum ImageFormat {
    Webp,
    Png,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Webp => "webp",
            ImageFormat::Png => "png",
        }
    }

    /// Guess the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "webp" => Some(ImageFormat::Webp),
            "png" => Some(ImageFormat::Png),
            _ => None,
        }
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Reference intensity the contrast adjustment pivots around.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug, Serialize, Deserialize)]
pub enum ContrastAnchor {
    /// Rounded mean intensity of the grayscale image
    Mean,
    /// Fixed 128 on the 8-bit scale
    MidGray,
}

impl std::fmt::Display for ContrastAnchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContrastAnchor::Mean => write!(f, "Mean"),
            ContrastAnchor::MidGray => write!(f, "MidGray"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Done,
    Failed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_path_ignores_case() {
        assert_eq!(
            ImageFormat::from_path(Path::new("a/cloud-hero-1.PNG")),
            Some(ImageFormat::Png)
        );
        assert_eq!(
            ImageFormat::from_path(Path::new("cloud-hero.webp")),
            Some(ImageFormat::Webp)
        );
        assert_eq!(ImageFormat::from_path(Path::new("cloud-hero.jpg")), None);
        assert_eq!(ImageFormat::from_path(Path::new("cloud-hero")), None);
    }
}
