use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::{DynamicImage, RgbImage, RgbaImage};
use tracing::info;

use crate::error::{Error, Result};

/// Dimensions after fitting `width` down to `target_width`, keeping the aspect ratio.
///
/// Returns `None` when the image is already at or below the target width.
pub fn calculate_target_dimensions(
    width: u32,
    height: u32,
    target_width: u32,
) -> Option<(u32, u32)> {
    if width == 0 {
        return None;
    }
    let scale_factor = target_width as f64 / width as f64;
    if scale_factor >= 1.0 {
        return None;
    }
    let new_height = (height as f64 * scale_factor).round().max(1.0) as u32;
    Some((target_width, new_height))
}

fn resize_raw(
    data: Vec<u8>,
    original: (u32, u32),
    target: (u32, u32),
    pixel_type: PixelType,
) -> Result<Vec<u8>> {
    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let src_image =
        Image::from_vec_u8(original.0, original.1, data, pixel_type).map_err(Error::resize)?;
    let mut dst_image = Image::new(target.0, target.1, pixel_type);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::resize)?;

    Ok(dst_image.into_vec())
}

pub fn resize_rgba(image: RgbaImage, target_width: u32, target_height: u32) -> Result<RgbaImage> {
    let original = image.dimensions();
    let data = resize_raw(
        image.into_raw(),
        original,
        (target_width, target_height),
        PixelType::U8x4,
    )?;
    RgbaImage::from_raw(target_width, target_height, data)
        .ok_or_else(|| Error::Resize("RGBA buffer size mismatch".to_string()))
}

pub fn resize_rgb(image: RgbImage, target_width: u32, target_height: u32) -> Result<RgbImage> {
    let original = image.dimensions();
    let data = resize_raw(
        image.into_raw(),
        original,
        (target_width, target_height),
        PixelType::U8x3,
    )?;
    RgbImage::from_raw(target_width, target_height, data)
        .ok_or_else(|| Error::Resize("RGB buffer size mismatch".to_string()))
}

/// Downsample `image` to `target_width` if it is wider; otherwise pass it through.
///
/// The returned flag tells whether a resize happened. Images with alpha keep it.
pub fn resize_to_width(image: DynamicImage, target_width: u32) -> Result<(DynamicImage, bool)> {
    let (width, height) = (image.width(), image.height());
    let Some((new_width, new_height)) = calculate_target_dimensions(width, height, target_width)
    else {
        return Ok((image, false));
    };

    info!(
        "Original size: {}x{}, New size: {}x{}",
        width, height, new_width, new_height
    );

    let resized = if image.color().has_alpha() {
        DynamicImage::ImageRgba8(resize_rgba(image.into_rgba8(), new_width, new_height)?)
    } else {
        DynamicImage::ImageRgb8(resize_rgb(image.into_rgb8(), new_width, new_height)?)
    };
    Ok((resized, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, Rgba};

    #[test]
    fn narrower_or_equal_images_are_untouched() {
        assert_eq!(calculate_target_dimensions(800, 600, 1080), None);
        assert_eq!(calculate_target_dimensions(1080, 720, 1080), None);
        assert_eq!(calculate_target_dimensions(0, 10, 1080), None);
    }

    #[test]
    fn wider_images_keep_aspect_ratio() {
        assert_eq!(calculate_target_dimensions(2000, 1000, 1080), Some((1080, 540)));
        // 1333 * 1080 / 4000 = 359.91
        assert_eq!(calculate_target_dimensions(4000, 1333, 1080), Some((1080, 360)));
        assert_eq!(calculate_target_dimensions(5000, 1, 1080), Some((1080, 1)));
    }

    #[test]
    fn resize_to_width_preserves_alpha_channel_type() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(40, 20, Rgba([10, 20, 30, 128])));
        let (out, resized) = resize_to_width(img, 10).unwrap();
        assert!(resized);
        assert_eq!((out.width(), out.height()), (10, 5));
        assert!(out.color().has_alpha());
    }

    #[test]
    fn resize_to_width_passes_through_small_images() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(8, 6, Rgb([1, 2, 3])));
        let (out, resized) = resize_to_width(img.clone(), 10).unwrap();
        assert!(!resized);
        assert_eq!(out, img);
    }

    #[test]
    fn uniform_rgb_stays_uniform() {
        let img = RgbImage::from_pixel(30, 30, Rgb([100, 150, 200]));
        let out = resize_rgb(img, 10, 10).unwrap();
        assert_eq!(out.dimensions(), (10, 10));
        for p in out.pixels() {
            for (got, want) in p.0.iter().zip([100u8, 150, 200]) {
                assert!(got.abs_diff(want) <= 1, "{got} vs {want}");
            }
        }
    }
}
