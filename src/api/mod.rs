//! High-level, ergonomic library API: bake or optimize single files, explicit
//! file lists, or whole directories. Every batch entrypoint isolates failures
//! per file and returns a serializable `BatchReport`.
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use image::DynamicImage;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::params::{BakeParams, OptimizeParams};
use crate::core::processing::pipeline::bake_image;
use crate::core::processing::resize::resize_to_width;
use crate::error::{Error, Result};
use crate::io::writers::{replace_with_webp, write_webp};
use crate::io::{FileFilter, file_size_kib, load_image, scan_directory};
use crate::types::{FileStatus, ImageFormat};

/// Outcome of one file in a batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub output: Option<PathBuf>,
    pub status: FileStatus,
    pub original_dims: Option<(u32, u32)>,
    pub output_dims: Option<(u32, u32)>,
    pub resized: bool,
    pub original_kib: Option<f64>,
    pub output_kib: Option<f64>,
    pub error: Option<String>,
}

impl FileReport {
    fn failed(path: &Path, err: &Error) -> Self {
        Self {
            path: path.to_path_buf(),
            output: None,
            status: FileStatus::Failed,
            original_dims: None,
            output_dims: None,
            resized: false,
            original_kib: None,
            output_kib: None,
            error: Some(err.to_string()),
        }
    }
}

/// Batch processing report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub started_at: DateTime<Utc>,
    pub processed: usize,
    pub failed: usize,
    pub files: Vec<FileReport>,
}

impl BatchReport {
    fn new() -> Self {
        Self {
            started_at: Utc::now(),
            processed: 0,
            failed: 0,
            files: Vec::new(),
        }
    }

    fn push(&mut self, report: FileReport) {
        match report.status {
            FileStatus::Done => self.processed += 1,
            FileStatus::Failed => self.failed += 1,
        }
        self.files.push(report);
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Bake the filter chain into one file, overwriting it in place.
///
/// Only WebP sources are accepted, since the result is written back as WebP.
pub fn bake_file(path: &Path, params: &BakeParams) -> Result<FileReport> {
    params.validate()?;
    if ImageFormat::from_path(path) != Some(ImageFormat::Webp) {
        return Err(Error::invalid("source_format", path.display()));
    }
    let original_kib = file_size_kib(path)?;

    let rgba = load_image(path)?.into_rgba8();
    let dims = rgba.dimensions();
    let baked = DynamicImage::ImageRgba8(bake_image(&rgba, params)?);
    drop(rgba);

    let written = replace_with_webp(path, &baked, &params.encode)?;
    info!("Baked filters into: {}", display_name(path));

    Ok(FileReport {
        path: path.to_path_buf(),
        output: Some(path.to_path_buf()),
        status: FileStatus::Done,
        original_dims: Some(dims),
        output_dims: Some(dims),
        resized: false,
        original_kib: Some(original_kib),
        output_kib: Some(written as f64 / 1024.0),
        error: None,
    })
}

/// Bake every path in order; a failing file is logged and skipped.
pub fn bake_files<P: AsRef<Path>>(paths: &[P], params: &BakeParams) -> BatchReport {
    let mut report = BatchReport::new();
    for path in paths {
        let path = path.as_ref();
        match bake_file(path, params) {
            Ok(file) => report.push(file),
            Err(e) => {
                warn!("Error processing {}: {}", display_name(path), e);
                report.push(FileReport::failed(path, &e));
            }
        }
    }
    report
}

/// Scan `dir` with `filter` and bake every match.
///
/// A missing or unreadable directory fails before any file is touched.
pub fn bake_directory(dir: &Path, filter: &FileFilter, params: &BakeParams) -> Result<BatchReport> {
    params.validate()?;
    let files = scan_directory(dir, filter)?;
    info!("Found {} images to bake filters.", files.len());
    Ok(bake_files(&files, params))
}

/// Downsample one file if needed, convert it and delete the source.
pub fn optimize_file(path: &Path, params: &OptimizeParams) -> Result<FileReport> {
    params.validate()?;
    let output = path.with_extension(params.output_format.extension());
    if output == path {
        return Err(Error::SamePath(output));
    }

    let img = load_image(path)?;
    let original_dims = (img.width(), img.height());
    let (img, resized) = resize_to_width(img, params.target_width)?;
    let output_dims = (img.width(), img.height());
    if resized {
        info!(
            "Resized {} to {}x{}",
            display_name(path),
            output_dims.0,
            output_dims.1
        );
    } else {
        info!(
            "Skipped resizing {} (already at or below {}px wide)",
            display_name(path),
            params.target_width
        );
    }

    write_webp(&output, &img, &params.encode)?;
    drop(img);

    let original_kib = file_size_kib(path)?;
    let output_kib = file_size_kib(&output)?;
    info!("  Converted: {:.2}KB -> {:.2}KB", original_kib, output_kib);

    if !params.keep_original {
        std::fs::remove_file(path)?;
    }

    Ok(FileReport {
        path: path.to_path_buf(),
        output: Some(output),
        status: FileStatus::Done,
        original_dims: Some(original_dims),
        output_dims: Some(output_dims),
        resized,
        original_kib: Some(original_kib),
        output_kib: Some(output_kib),
        error: None,
    })
}

/// Optimize every path in order; a failing file is logged, kept and skipped.
pub fn optimize_files<P: AsRef<Path>>(paths: &[P], params: &OptimizeParams) -> BatchReport {
    let mut report = BatchReport::new();
    for path in paths {
        let path = path.as_ref();
        match optimize_file(path, params) {
            Ok(file) => report.push(file),
            Err(e) => {
                warn!("Error processing {}: {}", display_name(path), e);
                report.push(FileReport::failed(path, &e));
            }
        }
    }
    report
}

/// Scan `dir` with `filter` and optimize every match.
pub fn optimize_directory(
    dir: &Path,
    filter: &FileFilter,
    params: &OptimizeParams,
) -> Result<BatchReport> {
    params.validate()?;
    let files = scan_directory(dir, filter)?;
    info!("Found {} images to process.", files.len());
    Ok(optimize_files(&files, params))
}
