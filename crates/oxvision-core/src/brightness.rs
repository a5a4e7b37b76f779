//! Per-image brightness planes
//!
//! Brightness is Rec. 601 luma (0.299 R + 0.587 G + 0.114 B) for RGB images
//! and the raw pixel value for grayscale, on the 0-255 scale.

use crate::dataset::{Channels, ImageBuffer};
use crate::heatmap::Heatmap;
use crate::simd::{gray8_to_f64_batch, luma_rgb8_batch};

/// Rec. 601 luma for a single RGB pixel
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> f64 {
    r as f64 * crate::simd::LUMA_R + g as f64 * crate::simd::LUMA_G + b as f64 * crate::simd::LUMA_B
}

/// Brightness plane of an image, at the image's own resolution
pub fn brightness_plane(image: &ImageBuffer) -> Heatmap {
    let mut data = vec![0.0; image.pixel_count()];
    match image.channels() {
        Channels::Gray => gray8_to_f64_batch(image.data(), &mut data),
        Channels::Rgb => luma_rgb8_batch(image.data(), &mut data),
    }
    Heatmap::from_raw(image.width(), image.height(), data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_plane_is_raw_values() {
        let image = ImageBuffer::gray(2, 2, vec![0, 10, 20, 255]).unwrap();
        let plane = brightness_plane(&image);
        assert_eq!(plane.data(), &[0.0, 10.0, 20.0, 255.0]);
    }

    #[test]
    fn test_rgb_plane_uses_luma() {
        let image = ImageBuffer::rgb(1, 1, vec![100, 150, 200]).unwrap();
        let plane = brightness_plane(&image);
        assert!((plane.get(0, 0) - luma(100, 150, 200)).abs() < 1e-12);
    }

    #[test]
    fn test_equal_channels_match_gray() {
        let rgb = ImageBuffer::rgb(2, 1, vec![42, 42, 42, 200, 200, 200]).unwrap();
        let gray = ImageBuffer::gray(2, 1, vec![42, 200]).unwrap();
        let a = brightness_plane(&rgb);
        let b = brightness_plane(&gray);
        for (x, y) in a.data().iter().zip(b.data()) {
            assert!((x - y).abs() < 1e-9);
        }
    }
}
