use image::{GrayImage, RgbaImage};

use crate::error::{Error, Result};

/// Fixed-order (R, G, B, A) planes of an RGBA image.
#[derive(Debug, Clone)]
pub struct ChannelSet {
    pub red: GrayImage,
    pub green: GrayImage,
    pub blue: GrayImage,
    pub alpha: GrayImage,
}

impl ChannelSet {
    pub fn split(image: &RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        let len = (width as usize) * (height as usize);
        let mut planes = [
            Vec::with_capacity(len),
            Vec::with_capacity(len),
            Vec::with_capacity(len),
            Vec::with_capacity(len),
        ];
        for pixel in image.as_raw().chunks_exact(4) {
            for (plane, &value) in planes.iter_mut().zip(pixel) {
                plane.push(value);
            }
        }
        let [red, green, blue, alpha] = planes.map(|plane| {
            // Buffer length is width * height by construction
            GrayImage::from_raw(width, height, plane).unwrap_or_else(|| GrayImage::new(width, height))
        });
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.alpha.dimensions()
    }

    /// Interleave the four planes back into one RGBA image.
    pub fn merge(self) -> Result<RgbaImage> {
        let expected = self.dimensions();
        for plane in [&self.red, &self.green, &self.blue] {
            if plane.dimensions() != expected {
                return Err(Error::ChannelMismatch {
                    expected,
                    actual: plane.dimensions(),
                });
            }
        }

        let (width, height) = expected;
        let mut out = Vec::with_capacity(self.alpha.as_raw().len() * 4);
        let planes = self
            .red
            .as_raw()
            .iter()
            .zip(self.green.as_raw())
            .zip(self.blue.as_raw())
            .zip(self.alpha.as_raw());
        for (((&r, &g), &b), &a) in planes {
            out.extend_from_slice(&[r, g, b, a]);
        }

        RgbaImage::from_raw(width, height, out).ok_or(Error::ChannelMismatch {
            expected,
            actual: (width, height),
        })
    }
}
