//! [`NoiseAsset`]: a lazily recomputed noise field behind the `Generator` trait.

use crate::config::NoiseConfig;
use crate::kernel::Kernel;
use crate::octave::relative_scale;
use crate::NoiseEngine;
use noise_asset_core::{EngineError, Field, Generator, Seed, Xorshift64};
use serde_json::Value;
use tracing::{debug, warn};

/// Lifecycle of the cached field.
///
/// Any accepted configuration write moves the asset to `Dirty`; reading the
/// field from `Dirty` passes through `Computing` to `Clean`. A failed
/// computation falls back to `Dirty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    Dirty,
    Computing,
    Clean,
}

/// Working state produced by one recomputation, replaced wholesale.
#[derive(Debug, Clone)]
struct Snapshot {
    field: Field,
    kernel: Kernel,
}

/// A configurable noise field generator.
#[derive(Debug, Clone)]
pub struct NoiseAsset {
    config: NoiseConfig,
    state: FieldState,
    snapshot: Option<Snapshot>,
}

impl Default for NoiseAsset {
    fn default() -> Self {
        Self::new(NoiseConfig::default())
    }
}

impl NoiseAsset {
    pub fn new(config: NoiseConfig) -> Self {
        Self {
            config,
            state: FieldState::Dirty,
            snapshot: None,
        }
    }

    /// Builds an asset from a reproducible recipe.
    ///
    /// The recipe's engine, dimensions and seed are applied first, then each
    /// entry of `params`. The first rejected attribute fails the whole recipe.
    pub fn from_seed(seed: &Seed) -> Result<Self, EngineError> {
        seed.validate()?;
        let mut config = NoiseConfig::default();
        config.set_engine(NoiseEngine::from_name(&seed.engine)?);
        config.set_width(seed.width)?;
        config.set_height(seed.height)?;
        config.set_seed(&seed.seed);

        let mut asset = Self::new(config);
        if let Some(err) = asset.set_params(&seed.params).into_iter().next() {
            return Err(err);
        }
        Ok(asset)
    }

    pub fn config(&self) -> &NoiseConfig {
        &self.config
    }

    pub fn state(&self) -> FieldState {
        self.state
    }

    /// Kernel built by the last recomputation, if the asset is clean.
    pub fn kernel(&self) -> Option<&Kernel> {
        match self.state {
            FieldState::Clean => self.snapshot.as_ref().map(|s| &s.kernel),
            FieldState::Dirty | FieldState::Computing => None,
        }
    }

    /// Applies typed setters atomically.
    ///
    /// `update` runs against a copy of the configuration; if it returns an
    /// error nothing changes, otherwise the copy replaces the configuration
    /// and the field is invalidated.
    pub fn update<F>(&mut self, update: F) -> Result<(), EngineError>
    where
        F: FnOnce(&mut NoiseConfig) -> Result<(), EngineError>,
    {
        let mut next = self.config.clone();
        update(&mut next)?;
        self.config = next;
        self.state = FieldState::Dirty;
        Ok(())
    }

    /// Writes every entry of a JSON object, each independently.
    ///
    /// Returns the rejected writes; accepted ones take effect regardless.
    pub fn set_params(&mut self, params: &Value) -> Vec<EngineError> {
        let Some(entries) = params.as_object() else {
            return vec![EngineError::invalid("params", "must be a JSON object")];
        };
        entries
            .iter()
            .filter_map(|(name, value)| self.set(name, value).err())
            .collect()
    }

    fn compute(&self) -> Result<Snapshot, EngineError> {
        let config = &self.config;
        let (width, height) = (config.width(), config.height());
        Field::cell_count(width, height)?;

        debug!(
            engine = config.engine().name(),
            width,
            height,
            octaves = config.octaves(),
            "recomputing noise field"
        );

        let mut rng = Xorshift64::from_seed_str(config.seed());
        let kernel = Kernel::init(config, &mut rng)?;
        let scale = relative_scale(width, config.scale());
        let raw = config.compositor().compose(&kernel, width, height, scale);
        let field = config.normalizer().normalize(&raw, scale, &mut rng)?;

        debug!(min = raw.min(), max = raw.max(), "noise field ready");
        Ok(Snapshot { field, kernel })
    }
}

impl Generator for NoiseAsset {
    fn field(&mut self) -> Result<&Field, EngineError> {
        let snapshot = match self.snapshot.take() {
            Some(snapshot) if self.state == FieldState::Clean => snapshot,
            _ => {
                self.state = FieldState::Computing;
                match self.compute() {
                    Ok(snapshot) => snapshot,
                    Err(err) => {
                        self.state = FieldState::Dirty;
                        return Err(err);
                    }
                }
            }
        };
        self.state = FieldState::Clean;
        Ok(&self.snapshot.insert(snapshot).field)
    }

    fn set(&mut self, name: &str, value: &Value) -> Result<(), EngineError> {
        match self.config.set(name, value) {
            Ok(()) => {
                self.state = FieldState::Dirty;
                Ok(())
            }
            Err(err) => {
                warn!(attribute = name, %value, error = %err, "rejected attribute");
                Err(err)
            }
        }
    }

    fn params(&self) -> Value {
        self.config.to_json()
    }

    fn param_schema(&self) -> Value {
        NoiseConfig::schema()
    }

    fn is_dirty(&self) -> bool {
        self.state != FieldState::Clean
    }
}
