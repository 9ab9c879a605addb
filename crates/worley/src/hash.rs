//! 32-bit cube hashing and the pseudo-Poisson feature-point model.
//!
//! All arithmetic is explicit `u32` wrapping; widening any step changes the
//! point layout for every seed.

use noise_asset_core::Random;

/// FNV 32-bit offset basis.
pub const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
/// FNV 32-bit prime.
pub const FNV_PRIME: u32 = 16_777_619;

/// Cumulative thresholds over the 32-bit range approximating Poisson(4).
/// A draw below entry `n` yields `n + 1` feature points.
pub const POISSON_CDF: [u64; 9] = [
    393_325_350,
    1_022_645_910,
    1_861_739_990,
    2_700_834_071,
    3_372_109_335,
    3_819_626_178,
    4_075_350_088,
    4_203_212_043,
    1 << 32,
];

const TWO_POW_32: f64 = 4_294_967_296.0;

/// FNV-style hash of a cube coordinate, one xor-multiply round per axis.
pub fn hash_cube(x: i32, y: i32, z: i32) -> u32 {
    [x, y, z].iter().fold(FNV_OFFSET_BASIS, |h, &v| {
        (h ^ v as u32).wrapping_mul(FNV_PRIME)
    })
}

/// One step of the 32-bit xorshift used for every cube draw.
#[inline]
pub fn xorshift(mut h: u32) -> u32 {
    h ^= h >> 12;
    h ^= h << 25;
    h ^= h >> 27;
    h.wrapping_mul(2)
}

/// Feature-point count (1..=9) for a probability draw.
pub fn poisson_count(draw: u32) -> usize {
    let draw = u64::from(draw);
    POISSON_CDF
        .iter()
        .position(|&t| draw < t)
        .map_or(POISSON_CDF.len(), |i| i + 1)
}

/// Source of feature points for a unit cube.
pub trait FeaturePoints {
    /// Calls `visit` with the absolute position of every feature point in
    /// the cube whose minimum corner is `cube`.
    fn visit<F: FnMut([f64; 3])>(&self, cube: [i32; 3], visit: F);
}

/// Feature points derived from the salted cube hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashedFeaturePoints {
    seed: i32,
}

impl HashedFeaturePoints {
    pub fn new(seed: i32) -> Self {
        Self { seed }
    }

    /// Draws the salt from `rng`, consuming exactly one value.
    pub fn from_random<R: Random + ?Sized>(rng: &mut R) -> Self {
        Self::new((rng.next_f64() * f64::from(i32::MAX)).floor() as i32)
    }

    pub fn seed(&self) -> i32 {
        self.seed
    }
}

impl FeaturePoints for HashedFeaturePoints {
    fn visit<F: FnMut([f64; 3])>(&self, cube: [i32; 3], mut visit: F) {
        let [cx, cy, cz] = cube;
        let mut state = xorshift(hash_cube(cx.wrapping_add(self.seed), cy, cz));
        for _ in 0..poisson_count(state) {
            let mut offset = [0.0; 3];
            for axis in &mut offset {
                state = xorshift(state);
                *axis = f64::from(state) / TWO_POW_32;
            }
            visit([
                f64::from(cx) + offset[0],
                f64::from(cy) + offset[1],
                f64::from(cz) + offset[2],
            ]);
        }
    }
}
