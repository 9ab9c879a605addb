//! Value noise: one seeded scalar per lattice corner, bilinearly blended.

use crate::permutation::PermutationTable;
use crate::smoothing::Smoothing;
use crate::{lerp, Noise2D};
use noise_asset_core::Random;

/// `2 * size` corner values; the upper half mirrors the lower.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueTable {
    values: Vec<f64>,
}

impl ValueTable {
    /// Draws `size` values in `[0, 1)` and mirrors them.
    pub fn build<R: Random + ?Sized>(size: usize, rng: &mut R) -> Self {
        let mut values = vec![0.0; 2 * size];
        for i in 0..size {
            let v = rng.next_f64();
            values[i] = v;
            values[i + size] = v;
        }
        Self { values }
    }

    #[inline]
    pub fn get(&self, index: usize) -> f64 {
        self.values[index]
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Value noise kernel. Output lies in `[0, 1)` with no remap.
#[derive(Debug, Clone)]
pub struct ValueNoise {
    table: PermutationTable,
    values: ValueTable,
    smoothing: Smoothing,
}

impl ValueNoise {
    /// Builds the kernel, drawing `table.size()` corner values from `rng`.
    pub fn new<R: Random + ?Sized>(table: PermutationTable, smoothing: Smoothing, rng: &mut R) -> Self {
        let values = ValueTable::build(table.size(), rng);
        Self {
            table,
            values,
            smoothing,
        }
    }

    pub fn values(&self) -> &ValueTable {
        &self.values
    }
}

impl Noise2D for ValueNoise {
    fn sample(&self, x: f64, y: f64) -> f64 {
        let p = self.table.locate(x, y);
        let v = p.slots.map(|slot| self.values.get(self.table.hash(slot)));
        let sx = self.smoothing.apply(p.rx0);
        let sy = self.smoothing.apply(p.ry0);
        let top = lerp(sx, v[0], v[1]);
        let bottom = lerp(sx, v[2], v[3]);
        lerp(sy, top, bottom)
    }
}
