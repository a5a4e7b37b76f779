//! SIMD-optimized batch pixel conversions
//!
//! These functions convert entire pixel buffers to brightness planes.

use multiversion::multiversion;

/// Rec. 601 luma weight for red
pub const LUMA_R: f64 = 0.299;
/// Rec. 601 luma weight for green
pub const LUMA_G: f64 = 0.587;
/// Rec. 601 luma weight for blue
pub const LUMA_B: f64 = 0.114;

/// Convert a buffer of RGB8 pixels to Rec. 601 luma values
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn luma_rgb8_batch(src: &[u8], dst: &mut [f64]) {
    assert!(src.len() % 3 == 0);
    assert!(dst.len() >= src.len() / 3);

    let pixels: &[[u8; 3]] = bytemuck::cast_slice(src);
    for (px, out) in pixels.iter().zip(dst.iter_mut()) {
        *out = px[0] as f64 * LUMA_R + px[1] as f64 * LUMA_G + px[2] as f64 * LUMA_B;
    }
}

/// Convert a buffer of Gray8 pixels to f64 brightness values
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn gray8_to_f64_batch(src: &[u8], dst: &mut [f64]) {
    assert!(dst.len() >= src.len());

    for (px, out) in src.iter().zip(dst.iter_mut()) {
        *out = *px as f64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luma_equal_channels_is_identity() {
        let src = [0u8, 0, 0, 128, 128, 128, 255, 255, 255];
        let mut dst = [0.0; 3];
        luma_rgb8_batch(&src, &mut dst);
        assert!((dst[0] - 0.0).abs() < 1e-9);
        assert!((dst[1] - 128.0).abs() < 1e-9);
        assert!((dst[2] - 255.0).abs() < 1e-9);
    }

    #[test]
    fn test_luma_weights() {
        let src = [255u8, 0, 0, 0, 255, 0, 0, 0, 255];
        let mut dst = [0.0; 3];
        luma_rgb8_batch(&src, &mut dst);
        assert!((dst[0] - 255.0 * LUMA_R).abs() < 1e-9);
        assert!((dst[1] - 255.0 * LUMA_G).abs() < 1e-9);
        assert!((dst[2] - 255.0 * LUMA_B).abs() < 1e-9);
    }

    #[test]
    fn test_gray_passthrough() {
        let src = [0u8, 17, 200, 255];
        let mut dst = [0.0; 4];
        gray8_to_f64_batch(&src, &mut dst);
        assert_eq!(dst, [0.0, 17.0, 200.0, 255.0]);
    }
}
