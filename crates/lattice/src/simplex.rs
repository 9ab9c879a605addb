//! 2D simplex noise.
//!
//! The plane is skewed so that unit squares split into two triangles; each
//! of the three triangle corners contributes a radially attenuated gradient
//! dot product.

use crate::permutation::PermutationTable;
use crate::{Noise2D, FIXED_GRADIENTS};

/// Skewing factor `(sqrt(3) - 1) / 2`.
const F2: f64 = 0.366_025_403_784_438_6;
/// Unskewing factor `(3 - sqrt(3)) / 6`.
const G2: f64 = 0.211_324_865_405_187_1;
/// Output gain applied before centering on 0.5.
const GAIN: f64 = 35.0;

/// Simplex kernel over the improved-Perlin gradient set.
#[derive(Debug, Clone)]
pub struct Simplex {
    table: PermutationTable,
}

impl Simplex {
    pub fn new(table: PermutationTable) -> Self {
        Self { table }
    }

    /// Contribution of one corner at offset `(dx, dy)` with gradient slot `g`.
    #[inline]
    fn corner(dx: f64, dy: f64, g: usize) -> f64 {
        let t = 0.5 - dx * dx - dy * dy;
        if t <= 0.0 {
            return 0.0;
        }
        let [gx, gy] = FIXED_GRADIENTS[g];
        let t2 = t * t;
        t2 * t2 * (gx * dx + gy * dy)
    }
}

impl Noise2D for Simplex {
    fn sample(&self, x: f64, y: f64) -> f64 {
        let s = (x + y) * F2;
        let i = (x + s).floor();
        let j = (y + s).floor();
        let t = (i + j) * G2;

        let x0 = x - (i - t);
        let y0 = y - (j - t);

        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let ii = self.table.wrap(i);
        let jj = self.table.wrap(j);
        let perm = |slot: usize| self.table.hash(slot);

        let g0 = self.table.hash_mod8(ii + perm(jj));
        let g1 = self.table.hash_mod8(ii + i1 + perm(jj + j1));
        let g2 = self.table.hash_mod8(ii + 1 + perm(jj + 1));

        let n0 = Self::corner(x0, y0, g0);
        let n1 = Self::corner(x0 - i1 as f64 + G2, y0 - j1 as f64 + G2, g1);
        let n2 = Self::corner(x0 - 1.0 + 2.0 * G2, y0 - 1.0 + 2.0 * G2, g2);

        0.5 + GAIN * (n0 + n1 + n2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noise_asset_core::Xorshift64;

    fn simplex(seed: &str, size: usize) -> Simplex {
        let mut rng = Xorshift64::from_seed_str(seed);
        Simplex::new(PermutationTable::build(size, &mut rng).unwrap())
    }

    #[test]
    fn skew_constants_match_closed_forms() {
        assert!((F2 - 0.5 * (3f64.sqrt() - 1.0)).abs() < 1e-15);
        assert!((G2 - (3.0 - 3f64.sqrt()) / 6.0).abs() < 1e-15);
    }

    #[test]
    fn origin_is_exactly_centered() {
        // At (0, 0) the first corner offset is zero and the other two lie
        // outside the attenuation radius.
        let s = simplex("origin", 256);
        assert!((s.sample(0.0, 0.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn corner_outside_radius_contributes_nothing() {
        assert_eq!(Simplex::corner(0.8, 0.0, 0), 0.0);
        assert_eq!(Simplex::corner(0.5, 0.5, 3), 0.0);
    }

    #[test]
    fn corner_uses_fourth_power_falloff() {
        // t = 0.5 - 0.01 = 0.49, gradient (1, 0), dot = 0.1
        let expected = 0.49f64.powi(4) * 0.1;
        assert!((Simplex::corner(0.1, 0.0, 4) - expected).abs() < 1e-15);
    }

    #[test]
    fn output_stays_in_unit_interval() {
        let s = simplex("range", 256);
        for step in 0..5000 {
            let x = step as f64 * 0.0917 - 100.0;
            let y = step as f64 * 0.0533 + 7.0;
            let v = s.sample(x, y);
            assert!((0.0..=1.0).contains(&v), "sample {v} at ({x}, {y})");
        }
    }

    #[test]
    fn negative_coordinates_are_handled() {
        let s = simplex("negative", 32);
        let v = s.sample(-12.3, -45.6);
        assert!(v.is_finite());
    }

    #[test]
    fn same_seed_samples_identically() {
        let a = simplex("abc", 256);
        let b = simplex("abc", 256);
        for step in 0..100 {
            let x = step as f64 * 0.29;
            assert_eq!(a.sample(x, 1.0 - x).to_bits(), b.sample(x, 1.0 - x).to_bits());
        }
    }

    #[test]
    fn output_is_not_flat() {
        let s = simplex("texture", 256);
        let values: Vec<f64> = (0..100).map(|i| s.sample(i as f64 * 0.37, 0.21)).collect();
        let spread = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
            - values.iter().cloned().fold(f64::INFINITY, f64::min);
        assert!(spread > 0.05, "simplex looks flat: spread {spread}");
    }
}
