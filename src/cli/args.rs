use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use cloudbake::ContrastAnchor;
use cloudbake::core::params::{
    DEFAULT_BAKE_QUALITY, DEFAULT_BRIGHTNESS, DEFAULT_CONTRAST, DEFAULT_DIRECTORY, DEFAULT_METHOD,
    DEFAULT_OPTIMIZE_QUALITY, DEFAULT_PREFIX, DEFAULT_TARGET_WIDTH,
};

#[derive(Parser)]
#[command(name = "cloudbake", version, about = "Batch bake and WebP conversion for hero images")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging
    #[arg(long, global = true, default_value_t = false)]
    pub log: bool,

    /// Write the batch report as JSON to this path
    #[arg(long, global = true)]
    pub report: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Bake grayscale, contrast and brightness into images, overwriting them
    Bake(BakeArgs),
    /// Downsample wide images and convert them to WebP, deleting the originals
    Optimize(OptimizeArgs),
}

#[derive(Args)]
pub struct ScanArgs {
    /// Directory holding the images
    #[arg(short, long, default_value = DEFAULT_DIRECTORY)]
    pub dir: PathBuf,

    /// Only pick up files whose name starts with this
    #[arg(long, default_value = DEFAULT_PREFIX)]
    pub prefix: String,
}

#[derive(Args)]
pub struct BakeArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Extension of the files to bake (without the dot)
    #[arg(long, default_value = "webp")]
    pub extension: String,

    /// Contrast factor, applied before brightness
    #[arg(long, default_value_t = DEFAULT_CONTRAST)]
    pub contrast: f32,

    /// Brightness factor
    #[arg(long, default_value_t = DEFAULT_BRIGHTNESS)]
    pub brightness: f32,

    /// Reference intensity the contrast pivots around (mean or mid-gray)
    #[arg(long, value_enum, default_value_t = ContrastAnchor::Mean)]
    pub contrast_anchor: ContrastAnchor,

    /// WebP quality (0-100)
    #[arg(short, long, default_value_t = DEFAULT_BAKE_QUALITY)]
    pub quality: u8,

    /// WebP compression effort (0-6)
    #[arg(short, long, default_value_t = DEFAULT_METHOD)]
    pub method: u8,
}

#[derive(Args)]
pub struct OptimizeArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Extension of the source files (without the dot)
    #[arg(long, default_value = "png")]
    pub extension: String,

    /// Images wider than this are downsampled to it
    #[arg(short, long, default_value_t = DEFAULT_TARGET_WIDTH)]
    pub width: u32,

    /// WebP quality (0-100)
    #[arg(short, long, default_value_t = DEFAULT_OPTIMIZE_QUALITY)]
    pub quality: u8,

    /// WebP compression effort (0-6)
    #[arg(short, long, default_value_t = DEFAULT_METHOD)]
    pub method: u8,

    /// Keep the source files instead of deleting them
    #[arg(long, default_value_t = false)]
    pub keep_original: bool,
}
