use std::fs;
use std::path::Path;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cloudbake::{
    BakeParams, BatchReport, EncodeSettings, FileFilter, FileStatus, ImageFormat, OptimizeParams,
    bake_directory, optimize_directory,
};

use super::args::{BakeArgs, CliArgs, Command, OptimizeArgs, ScanArgs};
use super::errors::AppError;

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn file_filter(scan: &ScanArgs, extension: &str) -> Result<FileFilter, AppError> {
    if extension.is_empty() || extension.starts_with('.') {
        return Err(AppError::InvalidExtension {
            extension: extension.to_string(),
        });
    }
    if !scan.dir.is_dir() {
        return Err(AppError::MissingDirectory {
            dir: scan.dir.display().to_string(),
        });
    }
    Ok(FileFilter::new(scan.prefix.clone(), extension))
}

fn run_bake(args: &BakeArgs) -> Result<BatchReport, AppError> {
    let filter = file_filter(&args.scan, &args.extension)?;
    let params = BakeParams {
        contrast: args.contrast,
        brightness: args.brightness,
        anchor: args.contrast_anchor,
        encode: EncodeSettings {
            quality: args.quality,
            method: args.method,
        },
    };

    info!("Baking from directory: {:?}", args.scan.dir);
    let report = bake_directory(&args.scan.dir, &filter, &params)?;
    info!("Filter baking complete.");
    Ok(report)
}

fn run_optimize(args: &OptimizeArgs) -> Result<BatchReport, AppError> {
    let filter = file_filter(&args.scan, &args.extension)?;
    let params = OptimizeParams {
        target_width: args.width,
        output_format: ImageFormat::Webp,
        encode: EncodeSettings {
            quality: args.quality,
            method: args.method,
        },
        keep_original: args.keep_original,
    };

    info!("Optimizing from directory: {:?}", args.scan.dir);
    let report = optimize_directory(&args.scan.dir, &filter, &params)?;
    info!("Optimization and resizing complete.");
    Ok(report)
}

fn write_report(report: &BatchReport, path: &Path) -> Result<(), AppError> {
    fs::write(path, report.to_json()?)?;
    info!("Report written to {:?}", path);
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);

    let report = match &args.command {
        Command::Bake(bake) => run_bake(bake)?,
        Command::Optimize(optimize) => run_optimize(optimize)?,
    };

    for file in report.files.iter().filter(|f| f.status == FileStatus::Failed) {
        warn!(
            "Failed: {:?}: {}",
            file.path,
            file.error.as_deref().unwrap_or("unknown error")
        );
    }
    info!("Processed: {}", report.processed);
    info!("Errors: {}", report.failed);

    if let Some(path) = &args.report {
        write_report(&report, path)?;
    }

    Ok(())
}
