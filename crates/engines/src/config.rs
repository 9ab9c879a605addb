//! The validated attribute surface of a noise asset.
//!
//! Every attribute has a typed setter that rejects out-of-domain values
//! without touching the stored one, and a camelCase name for the flat
//! JSON surface used by recipes and the CLI.

use crate::normalize::{FieldNormalizer, SumFunction};
use crate::octave::{OctaveCompositor, OctaveFunction};
use crate::NoiseEngine;
use noise_asset_core::params::{expect_f64, expect_str, expect_usize};
use noise_asset_core::{EngineError, MAX_CELLS};
use noise_asset_lattice::Smoothing;
use noise_asset_worley::WorleyOutput;
use serde_json::{json, Value};

const DEFAULT_SEED: &str = "any_random_string_will_do";
const DEFAULT_WIDTH: usize = 300;
const DEFAULT_HEIGHT: usize = 150;
/// Default lattice period.
const DEFAULT_SIZE: usize = 256;
const DEFAULT_SCALE: f64 = 50.0;
const DEFAULT_OCTAVES: usize = 1;
const DEFAULT_PERSISTENCE: f64 = 0.5;
const DEFAULT_LACUNARITY: f64 = 2.0;
const DEFAULT_SINE_FREQUENCY_COEFF: f64 = 1.0;
const DEFAULT_SUM_AMPLITUDE: f64 = 5.0;
const DEFAULT_WORLEY_DEPTH: f64 = 0.0;

/// Attribute names accepted by [`NoiseConfig::set`].
pub const ATTRIBUTES: &[&str] = &[
    "noiseEngine",
    "seed",
    "width",
    "height",
    "size",
    "scale",
    "octaves",
    "octaveFunction",
    "persistence",
    "lacunarity",
    "smoothing",
    "sumFunction",
    "sineFrequencyCoeff",
    "sumAmplitude",
    "worleyOutput",
    "worleyDepth",
];

/// Full configuration of a noise field.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseConfig {
    noise_engine: NoiseEngine,
    seed: String,
    width: usize,
    height: usize,
    size: usize,
    scale: f64,
    octaves: usize,
    octave_function: OctaveFunction,
    persistence: f64,
    lacunarity: f64,
    smoothing: Smoothing,
    sum_function: SumFunction,
    sine_frequency_coeff: f64,
    sum_amplitude: f64,
    worley_output: WorleyOutput,
    worley_depth: f64,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            noise_engine: NoiseEngine::default(),
            seed: DEFAULT_SEED.to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            size: DEFAULT_SIZE,
            scale: DEFAULT_SCALE,
            octaves: DEFAULT_OCTAVES,
            octave_function: OctaveFunction::default(),
            persistence: DEFAULT_PERSISTENCE,
            lacunarity: DEFAULT_LACUNARITY,
            smoothing: Smoothing::default(),
            sum_function: SumFunction::default(),
            sine_frequency_coeff: DEFAULT_SINE_FREQUENCY_COEFF,
            sum_amplitude: DEFAULT_SUM_AMPLITUDE,
            worley_output: WorleyOutput::default(),
            worley_depth: DEFAULT_WORLEY_DEPTH,
        }
    }
}

fn at_least_one(name: &str, v: usize) -> Result<usize, EngineError> {
    if v == 0 {
        return Err(EngineError::invalid(name, "must be at least 1"));
    }
    Ok(v)
}

fn finite(name: &str, v: f64) -> Result<f64, EngineError> {
    if !v.is_finite() {
        return Err(EngineError::invalid(name, "must be finite"));
    }
    Ok(v)
}

impl NoiseConfig {
    // -- getters --

    pub fn engine(&self) -> NoiseEngine {
        self.noise_engine
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Lattice period: the length of the permutation table.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn octaves(&self) -> usize {
        self.octaves
    }

    pub fn octave_function(&self) -> OctaveFunction {
        self.octave_function
    }

    pub fn persistence(&self) -> f64 {
        self.persistence
    }

    pub fn lacunarity(&self) -> f64 {
        self.lacunarity
    }

    pub fn smoothing(&self) -> Smoothing {
        self.smoothing
    }

    pub fn sum_function(&self) -> SumFunction {
        self.sum_function
    }

    pub fn sine_frequency_coeff(&self) -> f64 {
        self.sine_frequency_coeff
    }

    pub fn sum_amplitude(&self) -> f64 {
        self.sum_amplitude
    }

    pub fn worley_output(&self) -> WorleyOutput {
        self.worley_output
    }

    pub fn worley_depth(&self) -> f64 {
        self.worley_depth
    }

    /// First-pass parameters.
    pub fn compositor(&self) -> OctaveCompositor {
        OctaveCompositor {
            octaves: self.octaves,
            persistence: self.persistence,
            lacunarity: self.lacunarity,
            function: self.octave_function,
        }
    }

    /// Second-pass parameters.
    pub fn normalizer(&self) -> FieldNormalizer {
        FieldNormalizer {
            sum_function: self.sum_function,
            sine_frequency_coeff: self.sine_frequency_coeff,
            sum_amplitude: self.sum_amplitude,
        }
    }

    // -- typed setters --

    pub fn set_engine(&mut self, engine: NoiseEngine) {
        self.noise_engine = engine;
    }

    pub fn set_seed(&mut self, seed: &str) {
        self.seed = seed.to_string();
    }

    pub fn set_width(&mut self, width: usize) -> Result<(), EngineError> {
        self.width = at_least_one("width", width)?;
        Ok(())
    }

    pub fn set_height(&mut self, height: usize) -> Result<(), EngineError> {
        self.height = at_least_one("height", height)?;
        Ok(())
    }

    pub fn set_size(&mut self, size: usize) -> Result<(), EngineError> {
        let size = at_least_one("size", size)?;
        if size > MAX_CELLS {
            return Err(EngineError::invalid("size", format!("must be at most {MAX_CELLS}")));
        }
        self.size = size;
        Ok(())
    }

    pub fn set_scale(&mut self, scale: f64) -> Result<(), EngineError> {
        self.scale = finite("scale", scale)?;
        Ok(())
    }

    pub fn set_octaves(&mut self, octaves: usize) -> Result<(), EngineError> {
        self.octaves = at_least_one("octaves", octaves)?;
        Ok(())
    }

    pub fn set_octave_function(&mut self, function: OctaveFunction) {
        self.octave_function = function;
    }

    pub fn set_persistence(&mut self, persistence: f64) -> Result<(), EngineError> {
        self.persistence = finite("persistence", persistence)?;
        Ok(())
    }

    pub fn set_lacunarity(&mut self, lacunarity: f64) -> Result<(), EngineError> {
        self.lacunarity = finite("lacunarity", lacunarity)?;
        Ok(())
    }

    pub fn set_smoothing(&mut self, smoothing: Smoothing) {
        self.smoothing = smoothing;
    }

    pub fn set_sum_function(&mut self, function: SumFunction) {
        self.sum_function = function;
    }

    pub fn set_sine_frequency_coeff(&mut self, coeff: f64) -> Result<(), EngineError> {
        self.sine_frequency_coeff = finite("sineFrequencyCoeff", coeff)?;
        Ok(())
    }

    /// `modular` and `random` divide by the amplitude, so zero is rejected.
    pub fn set_sum_amplitude(&mut self, amplitude: f64) -> Result<(), EngineError> {
        let amplitude = finite("sumAmplitude", amplitude)?;
        if amplitude == 0.0 {
            return Err(EngineError::invalid("sumAmplitude", "must be non-zero"));
        }
        self.sum_amplitude = amplitude;
        Ok(())
    }

    pub fn set_worley_output(&mut self, output: WorleyOutput) {
        self.worley_output = output;
    }

    pub fn set_worley_depth(&mut self, depth: f64) -> Result<(), EngineError> {
        self.worley_depth = finite("worleyDepth", depth)?;
        Ok(())
    }

    // -- named surface --

    /// Writes one attribute by its camelCase name.
    ///
    /// `modularAmplitude` is accepted as an alias of `sumAmplitude`.
    /// Returns `EngineError::ParamNotFound` for names outside [`ATTRIBUTES`].
    pub fn set(&mut self, name: &str, value: &Value) -> Result<(), EngineError> {
        match name {
            "noiseEngine" => self.set_engine(NoiseEngine::from_name(expect_str(name, value)?)?),
            "seed" => self.set_seed(expect_str(name, value)?),
            "width" => self.set_width(expect_usize(name, value, 1)?)?,
            "height" => self.set_height(expect_usize(name, value, 1)?)?,
            "size" => self.set_size(expect_usize(name, value, 1)?)?,
            "scale" => self.set_scale(expect_f64(name, value)?)?,
            "octaves" => self.set_octaves(expect_usize(name, value, 1)?)?,
            "octaveFunction" => {
                self.set_octave_function(OctaveFunction::from_name(expect_str(name, value)?)?)
            }
            "persistence" => self.set_persistence(expect_f64(name, value)?)?,
            "lacunarity" => self.set_lacunarity(expect_f64(name, value)?)?,
            "smoothing" => self.set_smoothing(Smoothing::from_name(expect_str(name, value)?)?),
            "sumFunction" => self.set_sum_function(SumFunction::from_name(expect_str(name, value)?)?),
            "sineFrequencyCoeff" => self.set_sine_frequency_coeff(expect_f64(name, value)?)?,
            "sumAmplitude" | "modularAmplitude" => {
                self.set_sum_amplitude(expect_f64("sumAmplitude", value)?)?
            }
            "worleyOutput" => {
                self.set_worley_output(WorleyOutput::from_name(expect_str(name, value)?)?)
            }
            "worleyDepth" => self.set_worley_depth(expect_f64(name, value)?)?,
            _ => return Err(EngineError::ParamNotFound(name.to_string())),
        }
        Ok(())
    }

    /// Current attributes as a JSON object keyed by attribute name.
    pub fn to_json(&self) -> Value {
        json!({
            "noiseEngine": self.noise_engine.name(),
            "seed": self.seed,
            "width": self.width,
            "height": self.height,
            "size": self.size,
            "scale": self.scale,
            "octaves": self.octaves,
            "octaveFunction": self.octave_function.name(),
            "persistence": self.persistence,
            "lacunarity": self.lacunarity,
            "smoothing": self.smoothing.name(),
            "sumFunction": self.sum_function.name(),
            "sineFrequencyCoeff": self.sine_frequency_coeff,
            "sumAmplitude": self.sum_amplitude,
            "worleyOutput": self.worley_output.name(),
            "worleyDepth": self.worley_depth,
        })
    }

    /// Describes every attribute: type, default, domain.
    pub fn schema() -> Value {
        let enumerated = |default: &str, values: Vec<&str>, description: &str| {
            json!({
                "type": "string",
                "default": default,
                "values": values,
                "description": description,
            })
        };
        let number = |default: f64, description: &str| {
            json!({
                "type": "number",
                "default": default,
                "description": description,
            })
        };
        let count = |default: usize, description: &str| {
            json!({
                "type": "integer",
                "default": default,
                "min": 1,
                "description": description,
            })
        };

        json!({
            "noiseEngine": enumerated(
                NoiseEngine::default().name(),
                NoiseEngine::list_engines().to_vec(),
                "Noise algorithm",
            ),
            "seed": {
                "type": "string",
                "default": DEFAULT_SEED,
                "description": "Seed string for the pseudo-random tables",
            },
            "width": count(DEFAULT_WIDTH, "Field width in pixels"),
            "height": count(DEFAULT_HEIGHT, "Field height in pixels"),
            "size": count(DEFAULT_SIZE, "Lattice period (permutation table length)"),
            "scale": number(DEFAULT_SCALE, "Zoom; coordinates are multiplied by width^(-scale/100)"),
            "octaves": count(DEFAULT_OCTAVES, "Number of fBm layers"),
            "octaveFunction": enumerated(
                OctaveFunction::default().name(),
                OctaveFunction::names().collect(),
                "Per-octave post-processing",
            ),
            "persistence": number(DEFAULT_PERSISTENCE, "Amplitude multiplier per octave"),
            "lacunarity": number(DEFAULT_LACUNARITY, "Frequency multiplier per octave"),
            "smoothing": enumerated(
                Smoothing::default().name(),
                Smoothing::names().collect(),
                "Fade curve for lattice offsets",
            ),
            "sumFunction": enumerated(
                SumFunction::default().name(),
                SumFunction::names().collect(),
                "Post-normalization transform",
            ),
            "sineFrequencyCoeff": number(
                DEFAULT_SINE_FREQUENCY_COEFF,
                "Frequency of the sine sum functions",
            ),
            "sumAmplitude": {
                "type": "number",
                "default": DEFAULT_SUM_AMPLITUDE,
                "nonZero": true,
                "description": "Band count for modular, inverse jitter strength for random",
            },
            "worleyOutput": enumerated(
                WorleyOutput::default().name(),
                WorleyOutput::names().collect(),
                "Combinator over the three nearest feature-point distances",
            ),
            "worleyDepth": number(DEFAULT_WORLEY_DEPTH, "z coordinate of the cellular slice"),
        })
    }
}
