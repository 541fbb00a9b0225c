use std::fs;
use std::path::Path;

use cloudbake::{
    FileFilter, FileStatus, OptimizeParams, load_image, optimize_directory, optimize_file,
};
use image::{Rgb, RgbImage, Rgba, RgbaImage};

fn write_png(dir: &Path, name: &str, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x ^ y) % 256) as u8])
    });
    img.save(dir.join(name)).unwrap();
}

#[test]
fn converts_resizes_and_deletes_originals() {
    let dir = tempfile::tempdir().unwrap();
    write_png(dir.path(), "cloud-hero-1.png", 2000, 1000);
    write_png(dir.path(), "cloud-hero-2.png", 800, 600);
    write_png(dir.path(), "sky.png", 1500, 500);

    let report = optimize_directory(
        dir.path(),
        &FileFilter::new("cloud-hero", "png"),
        &OptimizeParams::default(),
    )
    .unwrap();

    assert_eq!(report.processed, 2);
    assert_eq!(report.failed, 0);

    let wide = dir.path().join("cloud-hero-1.webp");
    let img = load_image(&wide).unwrap();
    assert_eq!((img.width(), img.height()), (1080, 540));
    assert!(!dir.path().join("cloud-hero-1.png").exists());
    assert!(report.files[0].resized);
    assert_eq!(report.files[0].output.as_deref(), Some(wide.as_path()));

    let narrow = load_image(&dir.path().join("cloud-hero-2.webp")).unwrap();
    assert_eq!((narrow.width(), narrow.height()), (800, 600));
    assert!(!dir.path().join("cloud-hero-2.png").exists());
    assert!(!report.files[1].resized);

    assert!(dir.path().join("sky.png").exists());
    assert!(!dir.path().join("sky.webp").exists());
}

#[test]
fn failed_file_is_never_deleted() {
    let dir = tempfile::tempdir().unwrap();
    let corrupt = dir.path().join("cloud-hero-1.png");
    fs::write(&corrupt, b"\x89PNG\r\n\x1a\ntruncated").unwrap();
    write_png(dir.path(), "cloud-hero-2.png", 1200, 300);

    let report = optimize_directory(
        dir.path(),
        &FileFilter::new("cloud-hero", "png"),
        &OptimizeParams::default(),
    )
    .unwrap();

    assert_eq!(report.failed, 1);
    assert_eq!(report.processed, 1);
    assert_eq!(report.files[0].status, FileStatus::Failed);
    assert_eq!(fs::read(&corrupt).unwrap(), b"\x89PNG\r\n\x1a\ntruncated");
    assert!(!dir.path().join("cloud-hero-1.webp").exists());

    let converted = load_image(&dir.path().join("cloud-hero-2.webp")).unwrap();
    // 300 * 1080 / 1200 = 270
    assert_eq!((converted.width(), converted.height()), (1080, 270));
}

#[test]
fn keep_original_and_alpha_survive_conversion() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("cloud-hero-1.png");
    RgbaImage::from_fn(1600, 400, |x, _| Rgba([200, 210, 220, (x % 200) as u8 + 20]))
        .save(&source)
        .unwrap();

    let params = OptimizeParams {
        target_width: 400,
        keep_original: true,
        ..OptimizeParams::default()
    };
    let report = optimize_file(&source, &params).unwrap();

    assert!(source.exists());
    assert_eq!(report.original_dims, Some((1600, 400)));
    assert_eq!(report.output_dims, Some((400, 100)));
    assert!(report.output_kib.unwrap() > 0.0);

    let out = load_image(report.output.as_deref().unwrap()).unwrap();
    assert!(out.color().has_alpha());
    assert_eq!((out.width(), out.height()), (400, 100));
}
