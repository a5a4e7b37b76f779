//! In-memory image buffers
//!
//! Checks consume images as owned 8-bit pixel buffers. Decoding from files
//! or tensors belongs to upstream collaborators.

use crate::{Error, Result};

/// Channel layout of an image buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channels {
    /// Single-channel grayscale
    Gray,
    /// Three-channel RGB
    Rgb,
}

impl Channels {
    /// Number of bytes per pixel for this layout
    pub fn count(&self) -> usize {
        match self {
            Channels::Gray => 1,
            Channels::Rgb => 3,
        }
    }
}

/// An owned 8-bit image, row-major, no padding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    width: u32,
    height: u32,
    channels: Channels,
    data: Vec<u8>,
}

impl ImageBuffer {
    /// Create an image from raw pixel data
    ///
    /// Dimensions must be non-zero and `data.len()` must equal
    /// `width * height * channels.count()`.
    pub fn new(width: u32, height: u32, channels: Channels, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::Value(format!(
                "Image dimensions must be non-zero, got {width}x{height}."
            )));
        }
        let expected = width as usize * height as usize * channels.count();
        if data.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Create a grayscale image from raw pixel data
    pub fn gray(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        Self::new(width, height, Channels::Gray, data)
    }

    /// Create an RGB image from raw pixel data
    pub fn rgb(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        Self::new(width, height, Channels::Rgb, data)
    }

    /// Image width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Channel layout
    pub fn channels(&self) -> Channels {
        self.channels
    }

    /// Number of pixels
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Raw pixel bytes, row-major
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_count() {
        assert_eq!(Channels::Gray.count(), 1);
        assert_eq!(Channels::Rgb.count(), 3);
    }

    #[test]
    fn test_valid_construction() {
        let img = ImageBuffer::gray(4, 2, vec![0u8; 8]).unwrap();
        assert_eq!(img.width(), 4);
        assert_eq!(img.height(), 2);
        assert_eq!(img.pixel_count(), 8);
    }

    #[test]
    fn test_zero_dimensions_are_rejected() {
        let err = ImageBuffer::gray(0, 4, Vec::new()).unwrap_err();
        assert!(matches!(err, Error::Value(_)));
    }

    #[test]
    fn test_size_mismatch_is_rejected() {
        let err = ImageBuffer::rgb(4, 4, vec![0u8; 10]).unwrap_err();
        assert!(matches!(
            err,
            Error::BufferSize {
                expected: 48,
                actual: 10
            }
        ));
    }
}
