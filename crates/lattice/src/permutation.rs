//! Seeded lattice permutation tables.
//!
//! A [`PermutationTable`] maps integer lattice coordinates onto table slots
//! consistently, so gradients or values attached to lattice corners are
//! reproducible for a given seed.

use noise_asset_core::{EngineError, Random};

/// Shuffled index table with its mirror and mod-8 projection.
///
/// Invariants: `perm[0..size)` is a bijection on `0..size`,
/// `perm[i + size] == perm[i]`, and `perm_mod8[i] == perm[i] % 8`.
#[derive(Debug, Clone, PartialEq)]
pub struct PermutationTable {
    size: usize,
    perm: Vec<usize>,
    perm_mod8: Vec<usize>,
}

/// A point located on the lattice: fractional offsets from the enclosing
/// cell and the four corner slots `[c00, c10, c01, c11]` into the
/// second-level table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticePoint {
    pub rx0: f64,
    pub rx1: f64,
    pub ry0: f64,
    pub ry1: f64,
    pub slots: [usize; 4],
}

impl PermutationTable {
    /// Builds a table of period `size`, drawing shuffle indices from `rng`.
    ///
    /// The Fisher-Yates pass runs from `size - 1` down to 1; index 0 is never
    /// an outer swap position. Tables built this way must stay bit-identical
    /// across releases, so the bound is fixed.
    ///
    /// Returns `EngineError::InvalidParam` if `size` is zero.
    pub fn build<R: Random + ?Sized>(size: usize, rng: &mut R) -> Result<Self, EngineError> {
        if size == 0 {
            return Err(EngineError::invalid("size", "must be at least 1"));
        }
        let mut base: Vec<usize> = (0..size).collect();
        for i in (1..size).rev() {
            let j = ((rng.next_f64() * size as f64).floor() as usize).min(size - 1);
            base.swap(i, j);
        }

        let perm: Vec<usize> = base.iter().chain(base.iter()).copied().collect();
        let perm_mod8 = perm.iter().map(|p| p % 8).collect();
        Ok(Self {
            size,
            perm,
            perm_mod8,
        })
    }

    /// Lattice period.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Full `2 * size` permutation table.
    pub fn perm(&self) -> &[usize] {
        &self.perm
    }

    /// Full `2 * size` table of `perm[i] % 8`.
    pub fn perm_mod8(&self) -> &[usize] {
        &self.perm_mod8
    }

    /// `perm[slot]`.
    #[inline]
    pub fn hash(&self, slot: usize) -> usize {
        self.perm[slot]
    }

    /// `perm_mod8[slot]`.
    #[inline]
    pub fn hash_mod8(&self, slot: usize) -> usize {
        self.perm_mod8[slot]
    }

    /// Wraps an integer lattice coordinate into `0..size`.
    #[inline]
    pub fn wrap(&self, cell: f64) -> usize {
        (cell as i64).rem_euclid(self.size as i64) as usize
    }

    /// Locates `(x, y)` on the lattice.
    ///
    /// Cell `(bx0, by0)` is `floor` of each coordinate modulo `size`, the
    /// neighbour is one step further (again modulo `size`). Corner slots are
    /// `perm[bx] + by`, always below `2 * size`.
    pub fn locate(&self, x: f64, y: f64) -> LatticePoint {
        let fx = x.floor();
        let fy = y.floor();
        let bx0 = self.wrap(fx);
        let by0 = self.wrap(fy);
        let bx1 = (bx0 + 1) % self.size;
        let by1 = (by0 + 1) % self.size;

        let rx0 = x - fx;
        let ry0 = y - fy;

        let i = self.perm[bx0];
        let j = self.perm[bx1];

        LatticePoint {
            rx0,
            rx1: rx0 - 1.0,
            ry0,
            ry1: ry0 - 1.0,
            slots: [i + by0, j + by0, i + by1, j + by1],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noise_asset_core::Xorshift64;

    /// Replays a fixed list of draws, cycling when exhausted.
    struct Scripted {
        draws: Vec<f64>,
        cursor: usize,
    }

    impl Random for Scripted {
        fn next_f64(&mut self) -> f64 {
            let v = self.draws[self.cursor % self.draws.len()];
            self.cursor += 1;
            v
        }
    }

    fn assert_bijection(table: &PermutationTable) {
        let size = table.size();
        let mut seen = vec![false; size];
        for &p in &table.perm()[..size] {
            assert!(p < size, "entry {p} out of range for size {size}");
            assert!(!seen[p], "entry {p} appears twice");
            seen[p] = true;
        }
    }

    #[test]
    fn zero_size_is_rejected() {
        let mut rng = Xorshift64::from_seed_str("abc");
        assert!(matches!(
            PermutationTable::build(0, &mut rng),
            Err(EngineError::InvalidParam { .. })
        ));
    }

    #[test]
    fn size_one_table_is_trivial() {
        let mut rng = Xorshift64::from_seed_str("abc");
        let table = PermutationTable::build(1, &mut rng).unwrap();
        assert_eq!(table.perm(), &[0, 0]);
        assert_eq!(table.perm_mod8(), &[0, 0]);
    }

    #[test]
    fn shuffle_consumes_size_minus_one_draws() {
        let mut rng = Scripted {
            draws: vec![0.0],
            cursor: 0,
        };
        PermutationTable::build(16, &mut rng).unwrap();
        assert_eq!(rng.cursor, 15);
    }

    #[test]
    fn scripted_draws_follow_fisher_yates_from_the_top() {
        // size 4: i = 3, 2, 1 with j = floor(d * 4)
        // d = 0.0 -> j = 0 each time:
        // [0,1,2,3] -> swap(3,0) [3,1,2,0] -> swap(2,0) [2,1,3,0] -> swap(1,0) [1,2,3,0]
        let mut rng = Scripted {
            draws: vec![0.0],
            cursor: 0,
        };
        let table = PermutationTable::build(4, &mut rng).unwrap();
        assert_eq!(&table.perm()[..4], &[1, 2, 3, 0]);
    }

    #[test]
    fn upper_half_mirrors_lower_half() {
        let mut rng = Xorshift64::from_seed_str("mirror");
        let table = PermutationTable::build(64, &mut rng).unwrap();
        let (lo, hi) = table.perm().split_at(64);
        assert_eq!(lo, hi);
    }

    #[test]
    fn mod8_projection_matches_perm() {
        let mut rng = Xorshift64::from_seed_str("mod8");
        let table = PermutationTable::build(256, &mut rng).unwrap();
        for (p, m) in table.perm().iter().zip(table.perm_mod8()) {
            assert_eq!(p % 8, *m);
        }
    }

    #[test]
    fn same_seed_builds_same_table() {
        let a = PermutationTable::build(256, &mut Xorshift64::from_seed_str("abc")).unwrap();
        let b = PermutationTable::build(256, &mut Xorshift64::from_seed_str("abc")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn locate_wraps_negative_coordinates() {
        let table = PermutationTable::build(8, &mut Xorshift64::from_seed_str("wrap")).unwrap();
        let p = table.locate(-0.25, -8.75);
        assert!((p.rx0 - 0.75).abs() < 1e-12);
        assert!((p.ry0 - 0.25).abs() < 1e-12);
        assert!((p.rx1 + 0.25).abs() < 1e-12);
        assert!(p.slots.iter().all(|&s| s < 16));
        // floor(-0.25) = -1 and floor(-8.75) = -9 both wrap to 7, neighbour 0
        let i = table.perm()[7];
        let j = table.perm()[0];
        assert_eq!(p.slots, [i + 7, j + 7, i, j]);
    }

    #[test]
    fn locate_is_periodic_in_size() {
        let table = PermutationTable::build(16, &mut Xorshift64::from_seed_str("period")).unwrap();
        assert_eq!(table.locate(3.5, 2.25), table.locate(19.5, 34.25));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn lower_half_is_a_bijection(seed in ".*", size in 1usize..512) {
                let mut rng = Xorshift64::from_seed_str(&seed);
                let table = PermutationTable::build(size, &mut rng).unwrap();
                assert_bijection(&table);
                prop_assert_eq!(table.perm().len(), 2 * size);
                prop_assert_eq!(table.perm_mod8().len(), 2 * size);
            }

            #[test]
            fn corner_slots_stay_in_table(
                x in -1e6f64..1e6,
                y in -1e6f64..1e6,
                size in 1usize..300,
            ) {
                let mut rng = Xorshift64::from_seed_str("slots");
                let table = PermutationTable::build(size, &mut rng).unwrap();
                let p = table.locate(x, y);
                prop_assert!(p.slots.iter().all(|&s| s < 2 * size));
                prop_assert!((0.0..=1.0).contains(&p.rx0));
                prop_assert!((0.0..=1.0).contains(&p.ry0));
            }
        }
    }
}
