//! Reproducible recipe for a noise field.
//!
//! A [`Seed`] captures everything needed to recreate a field: engine name,
//! dimensions, attribute overrides and the seed string.

use crate::error::EngineError;
use crate::field::Field;
use serde::{Deserialize, Serialize};

/// Reproducible recipe for a noise field.
///
/// Two identical `Seed` values fed to the same generator produce
/// bit-identical fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Seed {
    pub engine: String,
    pub width: usize,
    pub height: usize,
    #[serde(default = "empty_params")]
    pub params: serde_json::Value,
    pub seed: String,
}

fn empty_params() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl Seed {
    /// Creates a new recipe with no attribute overrides.
    pub fn new(engine: &str, width: usize, height: usize, seed: &str) -> Self {
        Self {
            engine: engine.to_string(),
            width,
            height,
            params: empty_params(),
            seed: seed.to_string(),
        }
    }

    /// Validates that the recipe describes an allocatable field (see
    /// [`Field::cell_count`]) and that `params` is an object.
    pub fn validate(&self) -> Result<(), EngineError> {
        Field::cell_count(self.width, self.height)?;
        if !self.params.is_object() {
            return Err(EngineError::invalid("params", "must be a JSON object"));
        }
        Ok(())
    }
}
