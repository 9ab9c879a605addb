//! Two-dimensional scalar field holding a finished noise map.
//!
//! A `Field` stores `width * height` f64 values in row-major layout. Once a
//! generator hands one out it is never mutated again; recomputation builds a
//! fresh `Field` and replaces the old one wholesale.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// Largest field a generator will allocate, 2^26 cells (512 MiB of samples).
pub const MAX_CELLS: usize = 1 << 26;

/// A dense `height x width` matrix of normalized values in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl Field {
    /// Creates a field from a pre-built row-major data vector, validating
    /// that `data.len() == width * height`.
    ///
    /// Values are **not** clamped; the caller is responsible for ensuring
    /// they lie in [0, 1].
    pub fn from_data(width: usize, height: usize, data: Vec<f64>) -> Result<Self, EngineError> {
        let expected = Self::cell_count(width, height)?;
        if data.len() != expected {
            return Err(EngineError::DimensionMismatch {
                lhs_w: width,
                lhs_h: height,
                rhs_w: data.len(),
                rhs_h: 1,
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Field width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Field height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only access to the underlying row-major data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Gets the value at `(x, y)`.
    ///
    /// Returns `EngineError::OutOfBounds` when the coordinate lies outside
    /// the field.
    pub fn get(&self, x: usize, y: usize) -> Result<f64, EngineError> {
        if x >= self.width || y >= self.height {
            return Err(EngineError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.data[y * self.width + x])
    }

    /// Smallest and largest stored value.
    pub fn min_max(&self) -> (f64, f64) {
        self.data
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }

    /// Number of cells in a `width x height` field.
    ///
    /// Returns `EngineError::InvalidDimensions` if either dimension is zero
    /// or the product exceeds [`MAX_CELLS`].
    pub fn cell_count(width: usize, height: usize) -> Result<usize, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidDimensions);
        }
        width
            .checked_mul(height)
            .filter(|&len| len <= MAX_CELLS)
            .ok_or(EngineError::InvalidDimensions)
    }
}
