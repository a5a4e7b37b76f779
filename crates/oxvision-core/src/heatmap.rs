//! Heatmap grids
//!
//! A [`Heatmap`] is a row-major `f64` grid holding per-pixel statistics in
//! the [0, 255] brightness range. The [`HeatmapAccumulator`] averages planes
//! across the images of a dataset; accumulation order is fixed by the caller
//! so repeated runs stay bit-identical.

use serde::Serialize;

use crate::math::interpolation::{bilinear, source_coord};
use crate::{Error, Result};

/// A row-major 2D grid of f64 values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heatmap {
    width: u32,
    height: u32,
    data: Vec<f64>,
}

impl Heatmap {
    /// Create a heatmap from row-major data
    ///
    /// `data.len()` must equal `width * height`.
    pub fn new(width: u32, height: u32, data: Vec<f64>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Internal constructor for data whose length is correct by construction
    pub(crate) fn from_raw(width: u32, height: u32, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize);
        Self {
            width,
            height,
            data,
        }
    }

    /// A zero-filled heatmap
    pub fn zeros(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width as usize * height as usize],
        }
    }

    /// Grid width
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw values, row-major
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Value at (x, y)
    pub fn get(&self, x: u32, y: u32) -> f64 {
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Mean of all values; 0.0 for an empty grid
    pub fn mean(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        self.data.iter().sum::<f64>() / self.data.len() as f64
    }

    /// Maximum value; 0.0 for an empty grid
    pub fn max(&self) -> f64 {
        self.data.iter().copied().fold(0.0, f64::max)
    }

    /// Elementwise absolute difference with another heatmap of the same shape
    pub fn abs_diff(&self, other: &Heatmap) -> Result<Heatmap> {
        if self.width != other.width || self.height != other.height {
            return Err(Error::ShapeMismatch {
                expected_width: self.width,
                expected_height: self.height,
                actual_width: other.width,
                actual_height: other.height,
            });
        }
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| (a - b).abs())
            .collect();
        Ok(Heatmap {
            width: self.width,
            height: self.height,
            data,
        })
    }

    /// Resample to a new grid with bilinear interpolation
    ///
    /// A same-shape resample returns a plain copy.
    pub fn resample_bilinear(&self, width: u32, height: u32) -> Heatmap {
        if width == self.width && height == self.height {
            return self.clone();
        }
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for dy in 0..height {
            let sy = source_coord(dy, height, self.height);
            let y0 = sy.floor() as u32;
            let y1 = (y0 + 1).min(self.height - 1);
            let ty = sy - y0 as f64;
            for dx in 0..width {
                let sx = source_coord(dx, width, self.width);
                let x0 = sx.floor() as u32;
                let x1 = (x0 + 1).min(self.width - 1);
                let tx = sx - x0 as f64;
                data.push(bilinear(
                    self.get(x0, y0),
                    self.get(x1, y0),
                    self.get(x0, y1),
                    self.get(x1, y1),
                    tx,
                    ty,
                ));
            }
        }
        Heatmap {
            width,
            height,
            data,
        }
    }

    /// Values as rows, for display traces
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data
            .chunks_exact(self.width as usize)
            .map(|row| row.to_vec())
            .collect()
    }
}

/// Running per-pixel sum over same-shape planes
#[derive(Debug, Clone)]
pub struct HeatmapAccumulator {
    width: u32,
    height: u32,
    sum: Vec<f64>,
    count: usize,
}

impl HeatmapAccumulator {
    /// An empty accumulator for the given grid
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            sum: vec![0.0; width as usize * height as usize],
            count: 0,
        }
    }

    /// Add one plane; the plane shape must match the grid
    pub fn push(&mut self, plane: &Heatmap) -> Result<()> {
        if plane.width() != self.width || plane.height() != self.height {
            return Err(Error::ShapeMismatch {
                expected_width: self.width,
                expected_height: self.height,
                actual_width: plane.width(),
                actual_height: plane.height(),
            });
        }
        for (acc, value) in self.sum.iter_mut().zip(plane.data()) {
            *acc += value;
        }
        self.count += 1;
        Ok(())
    }

    /// Number of planes accumulated so far
    pub fn count(&self) -> usize {
        self.count
    }

    /// Per-pixel mean of the accumulated planes, `None` if nothing was pushed
    pub fn mean(&self) -> Option<Heatmap> {
        if self.count == 0 {
            return None;
        }
        let n = self.count as f64;
        let data = self.sum.iter().map(|s| s / n).collect();
        Some(Heatmap {
            width: self.width,
            height: self.height,
            data,
        })
    }
}
