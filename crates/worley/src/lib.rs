#![deny(unsafe_code)]
//! Cellular (Worley) noise for noise-asset.
//!
//! Space is cut into unit cubes, each holding one to nine feature points
//! placed by a salted 32-bit hash of the cube coordinate. A sample is built
//! from the distances to the three nearest feature points across the 27
//! cubes surrounding the query, combined through a [`WorleyOutput`].
//!
//! Unlike the lattice kernels, the engine is sampled once per pixel and is
//! never layered into octaves.

pub mod hash;
pub mod nearest;
pub mod output;

pub use hash::{FeaturePoints, HashedFeaturePoints};
pub use nearest::NearestDistances;
pub use output::WorleyOutput;

use serde::{Deserialize, Serialize};

/// Distance between a query and a feature point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    /// Sum of squared deltas. No square root is taken.
    #[default]
    Euclidean,
    /// Sum of absolute deltas.
    Manhattan,
}

impl DistanceMetric {
    #[inline]
    pub fn distance(self, a: [f64; 3], b: [f64; 3]) -> f64 {
        let (dx, dy, dz) = (a[0] - b[0], a[1] - b[1], a[2] - b[2]);
        match self {
            DistanceMetric::Euclidean => dx * dx + dy * dy + dz * dz,
            DistanceMetric::Manhattan => dx.abs() + dy.abs() + dz.abs(),
        }
    }
}

/// Worley noise over a feature-point source.
#[derive(Debug, Clone)]
pub struct WorleyEngine<P = HashedFeaturePoints> {
    points: P,
    metric: DistanceMetric,
    output: WorleyOutput,
}

impl<P: FeaturePoints> WorleyEngine<P> {
    pub fn new(points: P, metric: DistanceMetric, output: WorleyOutput) -> Self {
        Self {
            points,
            metric,
            output,
        }
    }

    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    pub fn output(&self) -> WorleyOutput {
        self.output
    }

    /// The three nearest feature-point distances to `(x, y, z)`, unclamped.
    pub fn nearest(&self, x: f64, y: f64, z: f64) -> NearestDistances {
        let query = [x, y, z];
        let (ix, iy, iz) = (x.floor() as i32, y.floor() as i32, z.floor() as i32);
        let mut nearest = NearestDistances::new();
        for i in -1..=1 {
            for j in -1..=1 {
                for k in -1..=1 {
                    let cube = [ix.wrapping_add(i), iy.wrapping_add(j), iz.wrapping_add(k)];
                    self.points
                        .visit(cube, |p| nearest.insert(self.metric.distance(query, p)));
                }
            }
        }
        nearest
    }

    /// Cellular noise at `(x, y, z)`.
    pub fn noise(&self, x: f64, y: f64, z: f64) -> f64 {
        self.output.combine(self.nearest(x, y, z).clamped())
    }
}
