use image::GrayImage;
use tracing::debug;

use crate::core::processing::channels::ChannelSet;
use crate::types::ContrastAnchor;

const MID_GRAY: u8 = 128;

/// ITU-R 601-2 luma in 16.16 fixed point.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((u32::from(r) * 19595 + u32::from(g) * 38470 + u32::from(b) * 7471 + 0x8000) >> 16) as u8
}

/// Collapse the colour planes of `channels` into one luminance plane.
pub fn grayscale_planes(channels: &ChannelSet) -> GrayImage {
    let (width, height) = channels.dimensions();
    let data: Vec<u8> = channels
        .red
        .as_raw()
        .iter()
        .zip(channels.green.as_raw())
        .zip(channels.blue.as_raw())
        .map(|((&r, &g), &b)| luma(r, g, b))
        .collect();
    GrayImage::from_raw(width, height, data).unwrap_or_else(|| GrayImage::new(width, height))
}

/// Rounded mean intensity; 0 for an empty image.
pub fn mean_intensity(image: &GrayImage) -> u8 {
    let raw = image.as_raw();
    if raw.is_empty() {
        return 0;
    }
    let sum: u64 = raw.iter().map(|&v| u64::from(v)).sum();
    (sum as f64 / raw.len() as f64 + 0.5) as u8
}

pub fn contrast_reference(image: &GrayImage, anchor: ContrastAnchor) -> u8 {
    match anchor {
        ContrastAnchor::Mean => mean_intensity(image),
        ContrastAnchor::MidGray => MID_GRAY,
    }
}

/// `reference + (v - reference) * factor` per pixel.
pub fn adjust_contrast(image: &mut GrayImage, factor: f32, reference: u8) {
    debug!("Contrast x{} around {}", factor, reference);
    let reference = f32::from(reference);
    for v in image.iter_mut() {
        *v = clamp_u8(reference + (f32::from(*v) - reference) * factor);
    }
}

/// `v * factor` per pixel.
pub fn adjust_brightness(image: &mut GrayImage, factor: f32) {
    debug!("Brightness x{}", factor);
    for v in image.iter_mut() {
        *v = clamp_u8(f32::from(*v) * factor);
    }
}

#[inline]
fn clamp_u8(value: f32) -> u8 {
    // Clamped before the cast; the cast truncates toward zero
    value.clamp(0.0, 255.0) as u8
}
