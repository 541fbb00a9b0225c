use image::RgbaImage;
use tracing::debug;

use crate::core::params::BakeParams;
use crate::core::processing::channels::ChannelSet;
use crate::core::processing::filters::{
    adjust_brightness, adjust_contrast, contrast_reference, grayscale_planes,
};
use crate::error::Result;

/// Bake the grayscale, contrast and brightness filters into `image`.
///
/// The alpha plane is split off first and reattached untouched; the three
/// colour planes of the result are always equal.
pub fn bake_image(image: &RgbaImage, params: &BakeParams) -> Result<RgbaImage> {
    let channels = ChannelSet::split(image);

    let mut gray = grayscale_planes(&channels);
    let reference = contrast_reference(&gray, params.anchor);
    debug!(
        "Baking {}x{} image, contrast reference {}",
        gray.width(),
        gray.height(),
        reference
    );

    adjust_contrast(&mut gray, params.contrast, reference);
    adjust_brightness(&mut gray, params.brightness);

    let baked = ChannelSet {
        red: gray.clone(),
        green: gray.clone(),
        blue: gray,
        alpha: channels.alpha,
    };
    baked.merge()
}
