//! The `Generator` trait implemented by lazily computed field producers.
//!
//! The trait is object-safe so generators can be driven as `dyn Generator`
//! from the CLI or other hosts.

use crate::error::EngineError;
use crate::field::Field;
use serde_json::Value;

/// A configurable producer of a scalar [`Field`].
///
/// Configuration writes go through [`Generator::set`]; a successful write
/// invalidates the cached field, a rejected write leaves both the attribute
/// and the cache untouched. [`Generator::field`] recomputes on demand.
pub trait Generator {
    /// The current field, recomputing it first if any attribute changed.
    fn field(&mut self) -> Result<&Field, EngineError>;

    /// Value of the current field at `(x, y)`.
    ///
    /// Returns `EngineError::OutOfBounds` for coordinates outside the field.
    fn value_at(&mut self, x: usize, y: usize) -> Result<f64, EngineError> {
        self.field()?.get(x, y)
    }

    /// Writes one named attribute.
    fn set(&mut self, name: &str, value: &Value) -> Result<(), EngineError>;

    /// Current attribute values as a JSON object.
    fn params(&self) -> Value;

    /// Schema describing all attributes, their types, domains and defaults.
    fn param_schema(&self) -> Value;

    /// Whether the next [`Generator::field`] call will recompute.
    fn is_dirty(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::expect_f64;
    use serde_json::json;

    /// Minimal generator used to verify trait object safety and the
    /// default `value_at`.
    struct FlatGenerator {
        level: f64,
        cached: Option<Field>,
        computations: usize,
    }

    impl FlatGenerator {
        fn new(level: f64) -> Self {
            Self {
                level,
                cached: None,
                computations: 0,
            }
        }
    }

    impl Generator for FlatGenerator {
        fn field(&mut self) -> Result<&Field, EngineError> {
            if self.cached.is_none() {
                self.computations += 1;
                self.cached = Some(Field::from_data(2, 2, vec![self.level; 4])?);
            }
            self.cached.as_ref().ok_or(EngineError::InvalidDimensions)
        }

        fn set(&mut self, name: &str, value: &Value) -> Result<(), EngineError> {
            match name {
                "level" => {
                    self.level = expect_f64(name, value)?;
                    self.cached = None;
                    Ok(())
                }
                other => Err(EngineError::ParamNotFound(other.to_owned())),
            }
        }

        fn params(&self) -> Value {
            json!({ "level": self.level })
        }

        fn param_schema(&self) -> Value {
            json!({ "level": { "type": "number", "default": 0.0 } })
        }

        fn is_dirty(&self) -> bool {
            self.cached.is_none()
        }
    }

    #[test]
    fn generator_trait_is_object_safe() {
        let mut generator: Box<dyn Generator> = Box::new(FlatGenerator::new(0.5));
        assert_eq!(generator.field().unwrap().width(), 2);
    }

    #[test]
    fn field_is_cached_until_a_write() {
        let mut generator = FlatGenerator::new(0.5);
        generator.field().unwrap();
        generator.field().unwrap();
        assert_eq!(generator.computations, 1);
        generator.set("level", &json!(0.25)).unwrap();
        assert!(generator.is_dirty());
        generator.field().unwrap();
        assert_eq!(generator.computations, 2);
    }

    #[test]
    fn rejected_write_keeps_cache() {
        let mut generator = FlatGenerator::new(0.5);
        generator.field().unwrap();
        assert!(generator.set("level", &json!("high")).is_err());
        assert!(!generator.is_dirty());
        assert_eq!(generator.params()["level"], 0.5);
    }

    #[test]
    fn default_value_at_reads_through_field() {
        let mut generator = FlatGenerator::new(0.75);
        assert_eq!(generator.value_at(1, 1).unwrap(), 0.75);
        assert!(matches!(
            generator.value_at(2, 0),
            Err(EngineError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn dyn_generator_mut_reference_works() {
        let mut generator = FlatGenerator::new(0.1);
        let generator_ref: &mut dyn Generator = &mut generator;
        generator_ref.set("level", &json!(0.9)).unwrap();
        assert_eq!(generator_ref.params()["level"], 0.9);
        assert!(generator_ref.param_schema().get("level").is_some());
    }
}
