#![deny(unsafe_code)]
//! Engine registry and field assembly for noise-asset.
//!
//! This crate sits between `noise-asset-core` (which defines the `Generator`
//! trait) and the kernel crates (`noise-asset-lattice`, `noise-asset-worley`).
//! The CLI depends only on this crate to avoid duplicating dispatch logic.
//!
//! A field is built in two passes: the [`OctaveCompositor`] layers kernel
//! samples into a [`RawField`], then the [`FieldNormalizer`] rescales it to
//! `[0, 1]` and applies the configured sum function.

pub mod asset;
pub mod config;
pub mod kernel;
pub mod normalize;
pub mod octave;

pub use asset::{FieldState, NoiseAsset};
pub use config::NoiseConfig;
pub use kernel::Kernel;
pub use normalize::{FieldNormalizer, SumFunction};
pub use octave::{relative_scale, OctaveCompositor, OctaveFunction, RawField};

pub use noise_asset_lattice::Smoothing;
pub use noise_asset_worley::WorleyOutput;

use noise_asset_core::EngineError;
use noise_asset_worley::DistanceMetric;
use serde::{Deserialize, Serialize};

/// All available engine names.
const ENGINE_NAMES: &[&str] = &[
    "perlin",
    "improved-perlin",
    "simplex",
    "value",
    "stripes",
    "smoothed-stripes",
    "worley-euclidean",
    "worley-manhattan",
];

/// Enumeration of all available noise engines.
///
/// Use [`NoiseEngine::from_name`] for string-based selection (CLI, recipes).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NoiseEngine {
    /// Classic Perlin with seeded gradients.
    Perlin,
    /// Perlin over eight fixed gradients.
    ImprovedPerlin,
    #[default]
    Simplex,
    Value,
    Stripes,
    SmoothedStripes,
    /// Cellular noise, squared euclidean distance.
    WorleyEuclidean,
    /// Cellular noise, manhattan distance.
    WorleyManhattan,
}

impl NoiseEngine {
    const ALL: [NoiseEngine; 8] = [
        NoiseEngine::Perlin,
        NoiseEngine::ImprovedPerlin,
        NoiseEngine::Simplex,
        NoiseEngine::Value,
        NoiseEngine::Stripes,
        NoiseEngine::SmoothedStripes,
        NoiseEngine::WorleyEuclidean,
        NoiseEngine::WorleyManhattan,
    ];

    /// Looks an engine up by name.
    ///
    /// Returns `EngineError::UnknownEngine` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, EngineError> {
        ENGINE_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| Self::ALL[i])
            .ok_or_else(|| EngineError::UnknownEngine(name.to_string()))
    }

    pub fn name(self) -> &'static str {
        match self {
            NoiseEngine::Perlin => "perlin",
            NoiseEngine::ImprovedPerlin => "improved-perlin",
            NoiseEngine::Simplex => "simplex",
            NoiseEngine::Value => "value",
            NoiseEngine::Stripes => "stripes",
            NoiseEngine::SmoothedStripes => "smoothed-stripes",
            NoiseEngine::WorleyEuclidean => "worley-euclidean",
            NoiseEngine::WorleyManhattan => "worley-manhattan",
        }
    }

    /// Returns a slice of all recognized engine names.
    pub fn list_engines() -> &'static [&'static str] {
        ENGINE_NAMES
    }

    /// Distance metric for the cellular engines, `None` for lattice engines.
    pub fn metric(self) -> Option<DistanceMetric> {
        match self {
            NoiseEngine::WorleyEuclidean => Some(DistanceMetric::Euclidean),
            NoiseEngine::WorleyManhattan => Some(DistanceMetric::Manhattan),
            _ => None,
        }
    }
}
