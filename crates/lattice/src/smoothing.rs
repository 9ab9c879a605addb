//! Fade curves applied to fractional lattice offsets.
//!
//! Each curve maps `t` in [0, 1] so that interpolation weights ease towards
//! integral lattice points. Naming follows the asset's convention: easing
//! *out* speeds up, easing *in* slows down (a train easing into a station).
//! Some curves (`Back`, `Elastic`) overshoot [0, 1] by design of the curve.

use noise_asset_core::EngineError;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A named smoothing curve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Smoothing {
    None,
    EaseOutSine,
    EaseInSine,
    EaseOutInSine,
    EaseOutQuad,
    EaseInQuad,
    EaseOutInQuad,
    EaseOutCubic,
    EaseInCubic,
    EaseOutInCubic,
    EaseOutQuart,
    EaseInQuart,
    EaseOutInQuart,
    EaseOutQuint,
    EaseInQuint,
    EaseOutInQuint,
    EaseOutExpo,
    EaseInExpo,
    EaseOutInExpo,
    EaseOutCirc,
    EaseInCirc,
    EaseOutInCirc,
    EaseOutBack,
    EaseInBack,
    EaseOutInBack,
    EaseOutElastic,
    EaseInElastic,
    EaseOutInElastic,
    EaseOutBounce,
    EaseInBounce,
    EaseOutInBounce,
    Cosine,
    Hermite,
    #[default]
    Quintic,
}

const BOUNCE_N1: f64 = 7.5625;
const BOUNCE_D1: f64 = 2.75;
const BACK_C1: f64 = 1.70158;

impl Smoothing {
    /// Every curve paired with its attribute name.
    pub const ALL: [(Smoothing, &'static str); 34] = [
        (Smoothing::None, "none"),
        (Smoothing::EaseOutSine, "easeOutSine"),
        (Smoothing::EaseInSine, "easeInSine"),
        (Smoothing::EaseOutInSine, "easeOutInSine"),
        (Smoothing::EaseOutQuad, "easeOutQuad"),
        (Smoothing::EaseInQuad, "easeInQuad"),
        (Smoothing::EaseOutInQuad, "easeOutInQuad"),
        (Smoothing::EaseOutCubic, "easeOutCubic"),
        (Smoothing::EaseInCubic, "easeInCubic"),
        (Smoothing::EaseOutInCubic, "easeOutInCubic"),
        (Smoothing::EaseOutQuart, "easeOutQuart"),
        (Smoothing::EaseInQuart, "easeInQuart"),
        (Smoothing::EaseOutInQuart, "easeOutInQuart"),
        (Smoothing::EaseOutQuint, "easeOutQuint"),
        (Smoothing::EaseInQuint, "easeInQuint"),
        (Smoothing::EaseOutInQuint, "easeOutInQuint"),
        (Smoothing::EaseOutExpo, "easeOutExpo"),
        (Smoothing::EaseInExpo, "easeInExpo"),
        (Smoothing::EaseOutInExpo, "easeOutInExpo"),
        (Smoothing::EaseOutCirc, "easeOutCirc"),
        (Smoothing::EaseInCirc, "easeInCirc"),
        (Smoothing::EaseOutInCirc, "easeOutInCirc"),
        (Smoothing::EaseOutBack, "easeOutBack"),
        (Smoothing::EaseInBack, "easeInBack"),
        (Smoothing::EaseOutInBack, "easeOutInBack"),
        (Smoothing::EaseOutElastic, "easeOutElastic"),
        (Smoothing::EaseInElastic, "easeInElastic"),
        (Smoothing::EaseOutInElastic, "easeOutInElastic"),
        (Smoothing::EaseOutBounce, "easeOutBounce"),
        (Smoothing::EaseInBounce, "easeInBounce"),
        (Smoothing::EaseOutInBounce, "easeOutInBounce"),
        (Smoothing::Cosine, "cosine"),
        (Smoothing::Hermite, "hermite"),
        (Smoothing::Quintic, "quintic"),
    ];

    /// Looks a curve up by its attribute name.
    pub fn from_name(name: &str) -> Result<Self, EngineError> {
        Self::ALL
            .iter()
            .find(|(_, n)| *n == name)
            .map(|(s, _)| *s)
            .ok_or_else(|| EngineError::unknown_option("smoothing", name))
    }

    /// The attribute name of this curve.
    pub fn name(self) -> &'static str {
        Self::ALL
            .iter()
            .find(|(s, _)| *s == self)
            .map(|(_, n)| *n)
            .unwrap_or("none")
    }

    /// All attribute names, in declaration order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::ALL.iter().map(|(_, n)| *n)
    }

    /// Applies the curve to `t`.
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Smoothing::None => t,

            Smoothing::EaseOutSine => 1.0 - (t * PI / 2.0).cos(),
            Smoothing::EaseInSine => (t * PI / 2.0).sin(),
            Smoothing::EaseOutInSine => -((PI * t).cos() - 1.0) / 2.0,

            Smoothing::EaseOutQuad => t * t,
            Smoothing::EaseInQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Smoothing::EaseOutInQuad => out_in_power(t, 2),

            Smoothing::EaseOutCubic => t * t * t,
            Smoothing::EaseInCubic => 1.0 - (1.0 - t).powi(3),
            Smoothing::EaseOutInCubic => out_in_power(t, 3),

            Smoothing::EaseOutQuart => t.powi(4),
            Smoothing::EaseInQuart => 1.0 - (1.0 - t).powi(4),
            Smoothing::EaseOutInQuart => out_in_power(t, 4),

            Smoothing::EaseOutQuint => t.powi(5),
            Smoothing::EaseInQuint => 1.0 - (1.0 - t).powi(5),
            Smoothing::EaseOutInQuint => out_in_power(t, 5),

            Smoothing::EaseOutExpo => {
                if t == 0.0 {
                    0.0
                } else {
                    2f64.powf(10.0 * t - 10.0)
                }
            }
            Smoothing::EaseInExpo => {
                if t == 1.0 {
                    1.0
                } else {
                    1.0 - 2f64.powf(-10.0 * t)
                }
            }
            Smoothing::EaseOutInExpo => {
                if t == 0.0 || t == 1.0 {
                    t
                } else if t < 0.5 {
                    2f64.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2f64.powf(-20.0 * t + 10.0)) / 2.0
                }
            }

            Smoothing::EaseOutCirc => 1.0 - (1.0 - t * t).sqrt(),
            Smoothing::EaseInCirc => (1.0 - (t - 1.0).powi(2)).sqrt(),
            Smoothing::EaseOutInCirc => {
                if t < 0.5 {
                    (1.0 - (1.0 - (2.0 * t).powi(2)).sqrt()) / 2.0
                } else {
                    ((1.0 - (-2.0 * t + 2.0).powi(2)).sqrt() + 1.0) / 2.0
                }
            }

            Smoothing::EaseOutBack => (BACK_C1 + 1.0) * t * t * t - BACK_C1 * t * t,
            Smoothing::EaseInBack => {
                1.0 + (BACK_C1 + 1.0) * (t - 1.0).powi(3) + BACK_C1 * (t - 1.0).powi(2)
            }
            Smoothing::EaseOutInBack => {
                let c2 = BACK_C1 * 1.525;
                if t < 0.5 {
                    ((2.0 * t).powi(2) * ((c2 + 1.0) * 2.0 * t - c2)) / 2.0
                } else {
                    ((2.0 * t - 2.0).powi(2) * ((c2 + 1.0) * (t * 2.0 - 2.0) + c2) + 2.0) / 2.0
                }
            }

            Smoothing::EaseOutElastic => {
                let c4 = (2.0 * PI) / 3.0;
                if t == 0.0 || t == 1.0 {
                    t
                } else {
                    -(2f64.powf(10.0 * t - 10.0)) * ((t * 10.0 - 10.75) * c4).sin()
                }
            }
            Smoothing::EaseInElastic => {
                let c4 = (2.0 * PI) / 3.0;
                if t == 0.0 || t == 1.0 {
                    t
                } else {
                    2f64.powf(-10.0 * t) * ((t * 10.0 - 0.75) * c4).sin() + 1.0
                }
            }
            Smoothing::EaseOutInElastic => {
                let c5 = (2.0 * PI) / 4.5;
                if t == 0.0 || t == 1.0 {
                    t
                } else if t < 0.5 {
                    -(2f64.powf(20.0 * t - 10.0) * ((20.0 * t - 11.125) * c5).sin()) / 2.0
                } else {
                    (2f64.powf(-20.0 * t + 10.0) * ((20.0 * t - 11.125) * c5).sin()) / 2.0 + 1.0
                }
            }

            Smoothing::EaseOutBounce => 1.0 - bounce(1.0 - t),
            Smoothing::EaseInBounce => bounce(t),
            Smoothing::EaseOutInBounce => {
                if t < 0.5 {
                    (1.0 - bounce(1.0 - 2.0 * t)) / 2.0
                } else {
                    (1.0 + bounce(2.0 * t - 1.0)) / 2.0
                }
            }

            Smoothing::Cosine => 0.5 * (1.0 + ((1.0 - t) * PI).cos()),
            Smoothing::Hermite => t * t * (-t * 2.0 + 3.0),
            Smoothing::Quintic => t * t * t * (t * (t * 6.0 - 15.0) + 10.0),
        }
    }
}

/// Symmetric power ease: accelerate through the first half, decelerate through the second.
fn out_in_power(t: f64, n: i32) -> f64 {
    if t < 0.5 {
        2f64.powi(n - 1) * t.powi(n)
    } else {
        1.0 - (-2.0 * t + 2.0).powi(n) / 2.0
    }
}

/// Piecewise-parabolic bounce decelerating into 1.
fn bounce(t: f64) -> f64 {
    if t < 1.0 / BOUNCE_D1 {
        BOUNCE_N1 * t * t
    } else if t < 2.0 / BOUNCE_D1 {
        let t = t - 1.5 / BOUNCE_D1;
        BOUNCE_N1 * t * t + 0.75
    } else if t < 2.5 / BOUNCE_D1 {
        let t = t - 2.25 / BOUNCE_D1;
        BOUNCE_N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / BOUNCE_D1;
        BOUNCE_N1 * t * t + 0.984375
    }
}
