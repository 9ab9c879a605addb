#![deny(unsafe_code)]
//! Lattice noise kernels for noise-asset.
//!
//! Every kernel maps a continuous 2D point to a raw scalar and is a pure
//! function of the point and the tables it was built with. Kernels know
//! nothing about octaves or post-processing; that lives in the engines crate.
//!
//! - [`ClassicPerlin`] - seeded unit gradients
//! - [`ImprovedPerlin`] - eight fixed gradients selected through `perm_mod8`
//! - [`Simplex`] - 2D simplex over the same gradient set
//! - [`ValueNoise`] - one seeded scalar per lattice corner
//! - [`Stripes`] / [`SmoothedStripes`] - stateless diagonal ramps

pub mod perlin;
pub mod permutation;
pub mod simplex;
pub mod smoothing;
pub mod stripes;
pub mod value;

pub use perlin::{ClassicPerlin, GradientTable, ImprovedPerlin};
pub use permutation::{LatticePoint, PermutationTable};
pub use simplex::Simplex;
pub use smoothing::Smoothing;
pub use stripes::{SmoothedStripes, Stripes};
pub use value::{ValueNoise, ValueTable};

/// A 2D noise kernel.
pub trait Noise2D {
    /// Raw kernel output at `(x, y)`.
    fn sample(&self, x: f64, y: f64) -> f64;
}

/// Eight fixed gradient directions shared by improved Perlin and simplex.
pub const FIXED_GRADIENTS: [[f64; 2]; 8] = [
    [1.0, 1.0],
    [-1.0, 1.0],
    [1.0, -1.0],
    [-1.0, -1.0],
    [1.0, 0.0],
    [-1.0, 0.0],
    [0.0, 1.0],
    [0.0, -1.0],
];

/// Linear interpolation from `a` to `b` by weight `t`.
#[inline]
pub fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}
