//! Combinators over the three nearest feature-point distances.

use noise_asset_core::EngineError;
use serde::{Deserialize, Serialize};

/// How the clamped distances `X <= Y <= Z` become one sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorleyOutput {
    #[default]
    X,
    Y,
    Z,
    XminusY,
    XminusZ,
    YminusX,
    YminusZ,
    ZminusX,
    ZminusY,
    XaddY,
    XaddZ,
    YaddZ,
    XaddYminusZ,
    XaddZminusY,
    YaddZminusX,
    XmultiplyY,
    XmultiplyZ,
    YmultiplyZ,
    XmultiplyYaddZ,
    XmultiplyZaddY,
    YmultiplyZaddX,
    XmultiplyYminusZ,
    XmultiplyZminusY,
    YmultiplyZminusX,
    XmultiplyYmultiplyZ,
    #[serde(rename = "sum")]
    Sum,
    #[serde(rename = "average")]
    Average,
}

impl WorleyOutput {
    pub const ALL: [(WorleyOutput, &'static str); 27] = [
        (WorleyOutput::X, "X"),
        (WorleyOutput::Y, "Y"),
        (WorleyOutput::Z, "Z"),
        (WorleyOutput::XminusY, "XminusY"),
        (WorleyOutput::XminusZ, "XminusZ"),
        (WorleyOutput::YminusX, "YminusX"),
        (WorleyOutput::YminusZ, "YminusZ"),
        (WorleyOutput::ZminusX, "ZminusX"),
        (WorleyOutput::ZminusY, "ZminusY"),
        (WorleyOutput::XaddY, "XaddY"),
        (WorleyOutput::XaddZ, "XaddZ"),
        (WorleyOutput::YaddZ, "YaddZ"),
        (WorleyOutput::XaddYminusZ, "XaddYminusZ"),
        (WorleyOutput::XaddZminusY, "XaddZminusY"),
        (WorleyOutput::YaddZminusX, "YaddZminusX"),
        (WorleyOutput::XmultiplyY, "XmultiplyY"),
        (WorleyOutput::XmultiplyZ, "XmultiplyZ"),
        (WorleyOutput::YmultiplyZ, "YmultiplyZ"),
        (WorleyOutput::XmultiplyYaddZ, "XmultiplyYaddZ"),
        (WorleyOutput::XmultiplyZaddY, "XmultiplyZaddY"),
        (WorleyOutput::YmultiplyZaddX, "YmultiplyZaddX"),
        (WorleyOutput::XmultiplyYminusZ, "XmultiplyYminusZ"),
        (WorleyOutput::XmultiplyZminusY, "XmultiplyZminusY"),
        (WorleyOutput::YmultiplyZminusX, "YmultiplyZminusX"),
        (WorleyOutput::XmultiplyYmultiplyZ, "XmultiplyYmultiplyZ"),
        (WorleyOutput::Sum, "sum"),
        (WorleyOutput::Average, "average"),
    ];

    pub fn from_name(name: &str) -> Result<Self, EngineError> {
        Self::ALL
            .iter()
            .find(|(_, n)| *n == name)
            .map(|(o, _)| *o)
            .ok_or_else(|| EngineError::unknown_option("worleyOutput", name))
    }

    pub fn name(self) -> &'static str {
        Self::ALL
            .iter()
            .find(|(o, _)| *o == self)
            .map_or("X", |(_, n)| *n)
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::ALL.iter().map(|(_, n)| *n)
    }

    /// Combines ascending distances `[x, y, z]`.
    pub fn combine(self, [x, y, z]: [f64; 3]) -> f64 {
        match self {
            WorleyOutput::X => x,
            WorleyOutput::Y => y,
            WorleyOutput::Z => z,
            WorleyOutput::XminusY => x - y,
            WorleyOutput::XminusZ => x - z,
            WorleyOutput::YminusX => y - x,
            WorleyOutput::YminusZ => y - z,
            WorleyOutput::ZminusX => z - x,
            WorleyOutput::ZminusY => z - y,
            WorleyOutput::XaddY => x + y,
            WorleyOutput::XaddZ => x + z,
            WorleyOutput::YaddZ => y + z,
            WorleyOutput::XaddYminusZ => x + y - z,
            WorleyOutput::XaddZminusY => x + z - y,
            WorleyOutput::YaddZminusX => y + z - x,
            WorleyOutput::XmultiplyY => x * y,
            WorleyOutput::XmultiplyZ => x * z,
            WorleyOutput::YmultiplyZ => y * z,
            WorleyOutput::XmultiplyYaddZ => x * y + z,
            WorleyOutput::XmultiplyZaddY => x * z + y,
            WorleyOutput::YmultiplyZaddX => y * z + x,
            WorleyOutput::XmultiplyYminusZ => x * y - z,
            WorleyOutput::XmultiplyZminusY => x * z - y,
            WorleyOutput::YmultiplyZminusX => y * z - x,
            WorleyOutput::XmultiplyYmultiplyZ => x * y * z,
            WorleyOutput::Sum => x + y + z,
            WorleyOutput::Average => (x + y + z) / 3.0,
        }
    }
}
