//! The closed set of kernels a [`NoiseEngine`] can select.

use crate::config::NoiseConfig;
use crate::NoiseEngine;
use noise_asset_core::{EngineError, Random};
use noise_asset_lattice::{
    ClassicPerlin, ImprovedPerlin, Noise2D, PermutationTable, Simplex, SmoothedStripes, Stripes,
    ValueNoise,
};
use noise_asset_worley::{HashedFeaturePoints, WorleyEngine};

/// An initialized kernel carrying only the tables its algorithm needs.
#[derive(Debug, Clone)]
pub enum Kernel {
    Perlin(ClassicPerlin),
    ImprovedPerlin(ImprovedPerlin),
    Simplex(Simplex),
    Value(ValueNoise),
    Stripes(Stripes),
    SmoothedStripes(SmoothedStripes),
    /// Cellular noise sampled on the plane `z = depth`.
    Worley { engine: WorleyEngine, depth: f64 },
}

impl Kernel {
    /// Builds the kernel for `config`, drawing from `rng`.
    ///
    /// The permutation table is always built first, whatever the engine, so
    /// every engine leaves `rng` at a position that depends only on `size`
    /// and the kernel's own tables.
    pub fn init<R: Random + ?Sized>(config: &NoiseConfig, rng: &mut R) -> Result<Self, EngineError> {
        let table = PermutationTable::build(config.size(), rng)?;
        let smoothing = config.smoothing();

        let kernel = match config.engine() {
            NoiseEngine::Perlin => Kernel::Perlin(ClassicPerlin::new(table, smoothing, rng)),
            NoiseEngine::ImprovedPerlin => Kernel::ImprovedPerlin(ImprovedPerlin::new(table, smoothing)),
            NoiseEngine::Simplex => Kernel::Simplex(Simplex::new(table)),
            NoiseEngine::Value => Kernel::Value(ValueNoise::new(table, smoothing, rng)),
            NoiseEngine::Stripes => Kernel::Stripes(Stripes),
            NoiseEngine::SmoothedStripes => Kernel::SmoothedStripes(SmoothedStripes::new(smoothing)),
            NoiseEngine::WorleyEuclidean | NoiseEngine::WorleyManhattan => {
                let points = HashedFeaturePoints::from_random(rng);
                let metric = config.engine().metric().unwrap_or_default();
                Kernel::Worley {
                    engine: WorleyEngine::new(points, metric, config.worley_output()),
                    depth: config.worley_depth(),
                }
            }
        };
        Ok(kernel)
    }

    /// Whether this kernel bypasses octave layering.
    pub fn is_cellular(&self) -> bool {
        matches!(self, Kernel::Worley { .. })
    }

    /// Raw kernel output at `(x, y)`.
    pub fn evaluate(&self, x: f64, y: f64) -> f64 {
        match self {
            Kernel::Perlin(k) => k.sample(x, y),
            Kernel::ImprovedPerlin(k) => k.sample(x, y),
            Kernel::Simplex(k) => k.sample(x, y),
            Kernel::Value(k) => k.sample(x, y),
            Kernel::Stripes(k) => k.sample(x, y),
            Kernel::SmoothedStripes(k) => k.sample(x, y),
            Kernel::Worley { engine, depth } => engine.noise(x, y, *depth),
        }
    }
}
