//! Classic and improved Perlin gradient noise.

use crate::permutation::PermutationTable;
use crate::smoothing::Smoothing;
use crate::{lerp, Noise2D, FIXED_GRADIENTS};
use noise_asset_core::Random;

/// `size` seeded unit gradient vectors, one per lattice slot.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientTable {
    gradients: Vec<[f64; 2]>,
}

impl GradientTable {
    /// Draws `size` vectors `(2r - 1, 2r' - 1)` and normalizes each.
    ///
    /// A draw of exactly `(0, 0)` has no direction and is replaced by `(1, 0)`.
    pub fn build<R: Random + ?Sized>(size: usize, rng: &mut R) -> Self {
        let gradients = (0..size)
            .map(|_| {
                let gx = rng.next_f64() * 2.0 - 1.0;
                let gy = rng.next_f64() * 2.0 - 1.0;
                let len = (gx * gx + gy * gy).sqrt();
                if len == 0.0 {
                    [1.0, 0.0]
                } else {
                    [gx / len, gy / len]
                }
            })
            .collect();
        Self { gradients }
    }

    /// Gradient at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> [f64; 2] {
        self.gradients[index]
    }

    /// Number of gradients.
    pub fn len(&self) -> usize {
        self.gradients.len()
    }

    /// Whether the table holds no gradients.
    pub fn is_empty(&self) -> bool {
        self.gradients.is_empty()
    }
}

/// Bilinear blend of four corner dot products, remapped from [-1, 1] to [0, 1].
#[inline]
fn blend(sx: f64, sy: f64, corners: [f64; 4]) -> f64 {
    let a = lerp(sx, corners[0], corners[1]);
    let b = lerp(sx, corners[2], corners[3]);
    0.5 * (1.0 + lerp(sy, a, b))
}

/// Perlin's original gradient noise with per-seed random unit gradients.
#[derive(Debug, Clone)]
pub struct ClassicPerlin {
    table: PermutationTable,
    gradients: GradientTable,
    smoothing: Smoothing,
}

impl ClassicPerlin {
    /// Builds the kernel, drawing `table.size()` gradients from `rng`.
    pub fn new<R: Random + ?Sized>(table: PermutationTable, smoothing: Smoothing, rng: &mut R) -> Self {
        let gradients = GradientTable::build(table.size(), rng);
        Self {
            table,
            gradients,
            smoothing,
        }
    }

    /// The gradient table drawn at construction.
    pub fn gradients(&self) -> &GradientTable {
        &self.gradients
    }
}

impl Noise2D for ClassicPerlin {
    fn sample(&self, x: f64, y: f64) -> f64 {
        let p = self.table.locate(x, y);
        let g = p.slots.map(|slot| self.gradients.get(self.table.hash(slot)));
        let sx = self.smoothing.apply(p.rx0);
        let sy = self.smoothing.apply(p.ry0);
        blend(
            sx,
            sy,
            [
                p.rx0 * g[0][0] + p.ry0 * g[0][1],
                p.rx1 * g[1][0] + p.ry0 * g[1][1],
                p.rx0 * g[2][0] + p.ry1 * g[2][1],
                p.rx1 * g[3][0] + p.ry1 * g[3][1],
            ],
        )
    }
}

/// Perlin noise with gradients restricted to [`FIXED_GRADIENTS`].
#[derive(Debug, Clone)]
pub struct ImprovedPerlin {
    table: PermutationTable,
    smoothing: Smoothing,
}

impl ImprovedPerlin {
    pub fn new(table: PermutationTable, smoothing: Smoothing) -> Self {
        Self { table, smoothing }
    }
}

impl Noise2D for ImprovedPerlin {
    fn sample(&self, x: f64, y: f64) -> f64 {
        let p = self.table.locate(x, y);
        let g = p.slots.map(|slot| FIXED_GRADIENTS[self.table.hash_mod8(slot)]);
        let sx = self.smoothing.apply(p.rx0);
        let sy = self.smoothing.apply(p.ry0);
        blend(
            sx,
            sy,
            [
                p.rx0 * g[0][0] + p.ry0 * g[0][1],
                p.rx1 * g[1][0] + p.ry0 * g[1][1],
                p.rx0 * g[2][0] + p.ry1 * g[2][1],
                p.rx1 * g[3][0] + p.ry1 * g[3][1],
            ],
        )
    }
}
