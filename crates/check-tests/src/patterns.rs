//! Test image generation
//!
//! Provides deterministic image patterns for property tests and benchmarks.

use oxvision_core::ImageBuffer;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Test image patterns
#[derive(Debug, Clone, Copy)]
pub enum ImagePattern {
    /// Every pixel at the given value
    Flat(u8),
    /// Horizontal gradient black to white
    GradientH,
    /// Vertical gradient black to white
    GradientV,
    /// 2x2 checkerboard of black and white
    Checker,
    /// Random pixels with seed
    Random(u64),
}

fn pattern_bytes(pattern: ImagePattern, width: u32, height: u32) -> Vec<u8> {
    let mut data = vec![0u8; width as usize * height as usize];
    match pattern {
        ImagePattern::Flat(value) => {
            data.fill(value);
        }
        ImagePattern::GradientH => {
            for y in 0..height {
                for x in 0..width {
                    let v = ((x as f32 / width as f32) * 255.0) as u8;
                    data[(y * width + x) as usize] = v;
                }
            }
        }
        ImagePattern::GradientV => {
            for y in 0..height {
                let v = ((y as f32 / height as f32) * 255.0) as u8;
                for x in 0..width {
                    data[(y * width + x) as usize] = v;
                }
            }
        }
        ImagePattern::Checker => {
            for y in 0..height {
                for x in 0..width {
                    let on = (x / 2 + y / 2) % 2 == 0;
                    data[(y * width + x) as usize] = if on { 255 } else { 0 };
                }
            }
        }
        ImagePattern::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            rng.fill_bytes(&mut data);
        }
    }
    data
}

/// Generate a grayscale test image
pub fn generate_gray(pattern: ImagePattern, width: u32, height: u32) -> ImageBuffer {
    ImageBuffer::gray(width, height, pattern_bytes(pattern, width, height))
        .expect("pattern buffer matches dimensions")
}

/// Generate an RGB test image with all channels equal
pub fn generate_rgb(pattern: ImagePattern, width: u32, height: u32) -> ImageBuffer {
    let gray = pattern_bytes(pattern, width, height);
    let mut data = Vec::with_capacity(gray.len() * 3);
    for v in gray {
        data.extend_from_slice(&[v, v, v]);
    }
    ImageBuffer::rgb(width, height, data).expect("pattern buffer matches dimensions")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat() {
        let img = generate_gray(ImagePattern::Flat(17), 4, 4);
        assert!(img.data().iter().all(|&v| v == 17));
    }

    #[test]
    fn test_random_deterministic() {
        let a = generate_gray(ImagePattern::Random(42), 10, 10);
        let b = generate_gray(ImagePattern::Random(42), 10, 10);
        assert_eq!(a.data(), b.data());
    }

    #[test]
    fn test_rgb_channels_equal() {
        let img = generate_rgb(ImagePattern::GradientH, 8, 2);
        for px in img.data().chunks_exact(3) {
            assert_eq!(px[0], px[1]);
            assert_eq!(px[1], px[2]);
        }
    }
}
