#![deny(unsafe_code)]
//! Core types and traits for the noise-asset procedural field generator.
//!
//! Provides the `Generator` trait, the `Field` result type, `EngineError`,
//! the seeded `Xorshift64` PRNG behind the `Random` seam, the `Seed` recipe,
//! and typed attribute extraction helpers.

pub mod error;
pub mod field;
pub mod generator;
pub mod params;
pub mod prng;
pub mod seed;

pub use error::EngineError;
pub use field::{Field, MAX_CELLS};
pub use generator::Generator;
pub use prng::{Random, Xorshift64};
pub use seed::Seed;
