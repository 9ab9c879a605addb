//! Error types for the noise-asset core.

use thiserror::Error;

/// Errors produced by field generation and configuration.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Width or height was zero when creating a Field.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A requested attribute name is not part of the configuration surface.
    #[error("parameter not found: {0}")]
    ParamNotFound(String),

    /// An attribute existed but had the wrong JSON type.
    #[error("parameter type mismatch for '{name}': expected {expected}, got {got}")]
    ParamTypeMismatch {
        name: String,
        expected: String,
        got: String,
    },

    /// An attribute had the right type but fell outside its domain.
    #[error("invalid value for '{name}': {reason}")]
    InvalidParam { name: String, reason: String },

    /// An (x, y) coordinate was outside the field bounds.
    #[error("index ({x}, {y}) out of bounds for field of size ({width}, {height})")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// A data buffer did not match the requested field dimensions.
    #[error("dimension mismatch: ({lhs_w}, {lhs_h}) vs ({rhs_w}, {rhs_h})")]
    DimensionMismatch {
        lhs_w: usize,
        lhs_h: usize,
        rhs_w: usize,
        rhs_h: usize,
    },

    /// A noise engine name was not recognized.
    #[error("unknown engine: {0}")]
    UnknownEngine(String),

    /// A named option (smoothing curve, sum function, ...) was not recognized.
    #[error("unknown {kind}: {value}")]
    UnknownOption { kind: String, value: String },

    /// An I/O failure while reading a recipe or writing output.
    #[error("i/o error: {0}")]
    Io(String),
}

impl EngineError {
    /// Shorthand for an [`EngineError::InvalidParam`].
    pub fn invalid(name: &str, reason: impl Into<String>) -> Self {
        EngineError::InvalidParam {
            name: name.to_owned(),
            reason: reason.into(),
        }
    }

    /// Shorthand for an [`EngineError::UnknownOption`].
    pub fn unknown_option(kind: &str, value: &str) -> Self {
        EngineError::UnknownOption {
            kind: kind.to_owned(),
            value: value.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimensions_displays_readable_message() {
        let msg = format!("{}", EngineError::InvalidDimensions);
        assert!(
            msg.contains("width") && msg.contains("height"),
            "expected message mentioning width and height, got: {msg}"
        );
    }

    #[test]
    fn param_type_mismatch_includes_all_fields() {
        let err = EngineError::ParamTypeMismatch {
            name: "octaves".into(),
            expected: "integer".into(),
            got: "string".into(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("octaves"), "missing param name in: {msg}");
        assert!(msg.contains("integer"), "missing expected type in: {msg}");
        assert!(msg.contains("string"), "missing got type in: {msg}");
    }

    #[test]
    fn invalid_param_helper_fills_name_and_reason() {
        let err = EngineError::invalid("size", "must be at least 1");
        let msg = format!("{err}");
        assert!(msg.contains("size"), "missing name in: {msg}");
        assert!(msg.contains("at least 1"), "missing reason in: {msg}");
    }

    #[test]
    fn out_of_bounds_includes_coordinates_and_dimensions() {
        let err = EngineError::OutOfBounds {
            x: 10,
            y: 20,
            width: 8,
            height: 8,
        };
        let msg = format!("{err}");
        assert!(msg.contains("10"), "missing x in: {msg}");
        assert!(msg.contains("20"), "missing y in: {msg}");
        assert!(msg.contains("8"), "missing dimension in: {msg}");
    }

    #[test]
    fn unknown_option_names_kind_and_value() {
        let err = EngineError::unknown_option("smoothing", "wobbly");
        let msg = format!("{err}");
        assert!(msg.contains("smoothing"), "missing kind in: {msg}");
        assert!(msg.contains("wobbly"), "missing value in: {msg}");
    }

    #[test]
    fn unknown_engine_includes_name() {
        let msg = format!("{}", EngineError::UnknownEngine("plasma".into()));
        assert!(msg.contains("plasma"), "missing engine name in: {msg}");
    }

    #[test]
    fn engine_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EngineError>();
    }

    #[test]
    fn engine_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<EngineError>();
    }
}
