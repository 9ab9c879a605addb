//! Fractal octave layering (fBm) over a kernel.

use crate::kernel::Kernel;
use noise_asset_core::EngineError;
use serde::{Deserialize, Serialize};

/// Per-octave post-processing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OctaveFunction {
    #[default]
    None,
    /// `|2v - 1|`, folding smooth noise into ridges.
    Absolute,
}

impl OctaveFunction {
    pub const ALL: [(OctaveFunction, &'static str); 2] = [
        (OctaveFunction::None, "none"),
        (OctaveFunction::Absolute, "absolute"),
    ];

    pub fn from_name(name: &str) -> Result<Self, EngineError> {
        Self::ALL
            .iter()
            .find(|(_, n)| *n == name)
            .map(|(f, _)| *f)
            .ok_or_else(|| EngineError::unknown_option("octaveFunction", name))
    }

    pub fn name(self) -> &'static str {
        match self {
            OctaveFunction::None => "none",
            OctaveFunction::Absolute => "absolute",
        }
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::ALL.iter().map(|(_, n)| *n)
    }

    #[inline]
    pub fn apply(self, v: f64) -> f64 {
        match self {
            OctaveFunction::None => v,
            OctaveFunction::Absolute => (2.0 * v - 1.0).abs(),
        }
    }
}

/// `width^(-scale / 100)`: the factor mapping pixel to noise coordinates.
pub fn relative_scale(width: usize, scale: f64) -> f64 {
    (width as f64).powf(-scale / 100.0)
}

/// Accumulated, unnormalized samples with their global extremes.
#[derive(Debug, Clone, PartialEq)]
pub struct RawField {
    width: usize,
    height: usize,
    data: Vec<f64>,
    min: f64,
    max: f64,
}

impl RawField {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major samples.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}

/// Octave layering parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OctaveCompositor {
    pub octaves: usize,
    pub persistence: f64,
    pub lacunarity: f64,
    pub function: OctaveFunction,
}

impl OctaveCompositor {
    /// Samples `kernel` over a `width x height` pixel grid.
    ///
    /// Lattice kernels are layered `octaves` times; cellular kernels are
    /// sampled once per pixel and skip the octave function entirely.
    /// Non-finite totals are stored as-is but left out of the extremes.
    pub fn compose(&self, kernel: &Kernel, width: usize, height: usize, relative_scale: f64) -> RawField {
        let mut data = Vec::with_capacity(width * height);
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for y in 0..height {
            let sy = y as f64 * relative_scale;
            for x in 0..width {
                let sx = x as f64 * relative_scale;
                let total = if kernel.is_cellular() {
                    kernel.evaluate(sx, sy)
                } else {
                    self.layer(kernel, sx, sy)
                };
                if total.is_finite() {
                    min = min.min(total);
                    max = max.max(total);
                }
                data.push(total);
            }
        }

        RawField {
            width,
            height,
            data,
            min,
            max,
        }
    }

    fn layer(&self, kernel: &Kernel, sx: f64, sy: f64) -> f64 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        for _ in 0..self.octaves {
            total += self.function.apply(kernel.evaluate(sx * frequency, sy * frequency)) * amplitude;
            frequency *= self.lacunarity;
            amplitude *= self.persistence;
        }
        total
    }
}
