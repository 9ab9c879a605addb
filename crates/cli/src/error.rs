//! CLI errors and their process exit codes.
//!
//! | code | meaning |
//! |------|---------|
//! | 0    | success |
//! | 2    | clap parse failure, reported before `run` starts |
//! | 10   | engine: unknown engine, rejected attribute, bad dimensions |
//! | 11   | i/o: recipe unreadable, output not writable |
//! | 12   | input: `--params` is not JSON, recipe is malformed |
//! | 13   | serialization of the field or a summary failed |

use noise_asset_core::EngineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(EngineError),

    #[error("{0}")]
    Io(String),

    #[error("{0}")]
    Input(String),

    #[error("{0}")]
    Serialization(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Engine(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

/// `EngineError::Io` keeps its i/o exit code; everything else is an engine failure.
impl From<EngineError> for CliError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::Io(msg) => CliError::Io(msg),
            other => CliError::Engine(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            CliError::Io(e.to_string())
        } else {
            CliError::Serialization(e.to_string())
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e.to_string())
    }
}
