//! Deterministic seeded randomness.
//!
//! [`Xorshift64`] is a fast, seedable PRNG. Noise assets are seeded with
//! strings, so [`Xorshift64::from_seed_str`] folds the seed text into the
//! 64-bit state with FNV-1a. Consumers draw through the [`Random`] trait so
//! tests can substitute a scripted source.

use serde::{Deserialize, Serialize};

/// A source of uniformly distributed floats in [0, 1).
///
/// The only contract is self-consistency: the same source state yields the
/// same sequence.
pub trait Random {
    /// Returns the next value in [0, 1).
    fn next_f64(&mut self) -> f64;
}

/// Xorshift64 deterministic PRNG. Same seed always produces the same sequence.
///
/// Uses the standard shift parameters (13, 7, 17). Seed of 0 is replaced with
/// a non-zero fallback to avoid the all-zeros fixed point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    /// Fallback seed used when the caller provides 0, which is a fixed point
    /// of the xorshift algorithm.
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    /// Creates a new PRNG with the given numeric seed.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Creates a PRNG whose sequence is a pure function of `seed`.
    pub fn from_seed_str(seed: &str) -> Self {
        Self::new(fnv1a_64(seed.as_bytes()))
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }
}

impl Random for Xorshift64 {
    /// Upper 53 bits of `next_u64()` divided by 2^53.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// 64-bit FNV-1a hash.
fn fnv1a_64(bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    bytes.iter().fold(OFFSET_BASIS, |hash, &b| {
        (hash ^ u64::from(b)).wrapping_mul(PRIME)
    })
}
