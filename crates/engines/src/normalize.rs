//! Rescaling a raw field into `[0, 1]` and post-processing it.

use crate::octave::RawField;
use noise_asset_core::{EngineError, Field, Random};
use serde::{Deserialize, Serialize};

/// Post-normalization transform applied per pixel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SumFunction {
    #[default]
    None,
    /// Blends in a sinusoid along x.
    SineX,
    /// Blends in a sinusoid along y.
    SineY,
    /// Blends in sinusoids along both axes.
    Sine,
    /// `frac(v * sumAmplitude)`: repeating bands.
    Modular,
    /// Seeded jitter of `±0.5 / sumAmplitude`, clamped.
    Random,
}

impl SumFunction {
    pub const ALL: [(SumFunction, &'static str); 6] = [
        (SumFunction::None, "none"),
        (SumFunction::SineX, "sine-x"),
        (SumFunction::SineY, "sine-y"),
        (SumFunction::Sine, "sine"),
        (SumFunction::Modular, "modular"),
        (SumFunction::Random, "random"),
    ];

    pub fn from_name(name: &str) -> Result<Self, EngineError> {
        Self::ALL
            .iter()
            .find(|(_, n)| *n == name)
            .map(|(f, _)| *f)
            .ok_or_else(|| EngineError::unknown_option("sumFunction", name))
    }

    pub fn name(self) -> &'static str {
        Self::ALL
            .iter()
            .find(|(f, _)| *f == self)
            .map_or("none", |(_, n)| *n)
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::ALL.iter().map(|(_, n)| *n)
    }
}

/// Second-pass parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldNormalizer {
    pub sum_function: SumFunction,
    pub sine_frequency_coeff: f64,
    pub sum_amplitude: f64,
}

impl FieldNormalizer {
    /// Maps `raw` onto `[0, 1]` via its min/max and applies the sum function.
    ///
    /// A flat field (`max == min`) normalizes to 0 everywhere, as does any
    /// pixel whose raw total or sum-function result is not finite. Only
    /// [`SumFunction::Random`] draws from `rng`, once per pixel in row-major
    /// order.
    pub fn normalize<R: Random + ?Sized>(
        &self,
        raw: &RawField,
        relative_scale: f64,
        rng: &mut R,
    ) -> Result<Field, EngineError> {
        let min = raw.min();
        let span = raw.max() - min;
        let width = raw.width();

        let data = raw
            .data()
            .iter()
            .enumerate()
            .map(|(i, &total)| {
                let v = if total.is_finite() && span > 0.0 {
                    (total - min) / span
                } else {
                    0.0
                };
                let sx = (i % width) as f64 * relative_scale;
                let sy = (i / width) as f64 * relative_scale;
                let out = self.apply(v, sx, sy, rng);
                if out.is_finite() {
                    out
                } else {
                    0.0
                }
            })
            .collect();

        Field::from_data(width, raw.height(), data)
    }

    /// Applies the sum function to a normalized value at scaled position `(sx, sy)`.
    pub fn apply<R: Random + ?Sized>(&self, v: f64, sx: f64, sy: f64, rng: &mut R) -> f64 {
        let c = self.sine_frequency_coeff;
        let a = self.sum_amplitude;
        match self.sum_function {
            SumFunction::None => v,
            SumFunction::SineX => 0.5 + (sx * c + v).sin() / 2.0,
            SumFunction::SineY => 0.5 + (sy * c + v).sin() / 2.0,
            SumFunction::Sine => 0.5 + (sx * c + v).sin() / 4.0 + (sy * c + v).sin() / 4.0,
            SumFunction::Modular => {
                let g = v * a;
                g - g.floor()
            }
            SumFunction::Random => (v + rng.next_f64() / a - 0.5 / a).clamp(0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::Kernel;
    use crate::octave::{OctaveCompositor, OctaveFunction};
    use noise_asset_core::Xorshift64;
    use noise_asset_lattice::{Smoothing, SmoothedStripes, Stripes};

    /// Always returns the same draw.
    struct Constant(f64);

    impl Random for Constant {
        fn next_f64(&mut self) -> f64 {
            self.0
        }
    }

    fn normalizer(sum_function: SumFunction) -> FieldNormalizer {
        FieldNormalizer {
            sum_function,
            sine_frequency_coeff: 1.0,
            sum_amplitude: 5.0,
        }
    }

    fn stripes_raw(width: usize, height: usize) -> RawField {
        OctaveCompositor {
            octaves: 1,
            persistence: 0.5,
            lacunarity: 2.0,
            function: OctaveFunction::None,
        }
        .compose(&Kernel::Stripes(Stripes), width, height, 1.0)
    }

    // -- names --

    #[test]
    fn sum_function_names_resolve() {
        for (f, name) in SumFunction::ALL {
            assert_eq!(SumFunction::from_name(name).unwrap(), f);
            assert_eq!(f.name(), name);
            assert_eq!(serde_json::to_value(f).unwrap(), name);
        }
        assert!(matches!(
            SumFunction::from_name("cosine"),
            Err(EngineError::UnknownOption { .. })
        ));
    }

    // -- normalize --

    #[test]
    fn extremes_map_to_zero_and_one() {
        let field = normalizer(SumFunction::None)
            .normalize(&stripes_raw(5, 3), 1.0, &mut Constant(0.0))
            .unwrap();
        let (min, max) = field.min_max();
        assert_eq!(min, 0.0);
        assert_eq!(max, 1.0);
        assert_eq!(field.get(0, 0).unwrap(), 0.0);
        assert_eq!(field.get(4, 2).unwrap(), 1.0);
    }

    #[test]
    fn flat_field_normalizes_to_zero() {
        let raw = stripes_raw(1, 1);
        let field = normalizer(SumFunction::None)
            .normalize(&raw, 1.0, &mut Constant(0.0))
            .unwrap();
        assert_eq!(field.data(), &[0.0]);
    }

    #[test]
    fn undefined_samples_normalize_to_zero() {
        let raw = OctaveCompositor {
            octaves: 1,
            persistence: 0.5,
            lacunarity: 2.0,
            function: OctaveFunction::None,
        }
        .compose(
            &Kernel::SmoothedStripes(SmoothedStripes::new(Smoothing::EaseOutCirc)),
            4,
            1,
            1.0,
        );
        let field = normalizer(SumFunction::None)
            .normalize(&raw, 1.0, &mut Constant(0.0))
            .unwrap();
        assert_eq!(field.data(), &[0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn overflowing_sum_function_falls_back_to_zero() {
        let n = FieldNormalizer {
            sum_amplitude: 1e-320,
            ..normalizer(SumFunction::Random)
        };
        let field = n.normalize(&stripes_raw(3, 1), 1.0, &mut Constant(0.5)).unwrap();
        assert!(field.data().iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn dimensions_are_preserved() {
        let field = normalizer(SumFunction::Sine)
            .normalize(&stripes_raw(8, 3), 0.5, &mut Constant(0.0))
            .unwrap();
        assert_eq!((field.width(), field.height()), (8, 3));
    }

    // -- sum functions --

    #[test]
    fn sine_x_uses_x_position() {
        let n = normalizer(SumFunction::SineX);
        let mut rng = Constant(0.0);
        assert!((n.apply(0.0, 0.0, 9.0, &mut rng) - 0.5).abs() < 1e-12);
        let expected = 0.5 + (1.0f64 + 0.25).sin() / 2.0;
        assert!((n.apply(0.25, 1.0, 9.0, &mut rng) - expected).abs() < 1e-12);
    }

    #[test]
    fn sine_y_uses_y_position() {
        let n = normalizer(SumFunction::SineY);
        let expected = 0.5 + (2.0f64 + 0.1).sin() / 2.0;
        assert!((n.apply(0.1, 7.0, 2.0, &mut Constant(0.0)) - expected).abs() < 1e-12);
    }

    #[test]
    fn sine_blends_both_axes() {
        let n = FieldNormalizer {
            sine_frequency_coeff: 3.0,
            ..normalizer(SumFunction::Sine)
        };
        let expected = 0.5 + (3.0f64 * 0.5 + 0.2).sin() / 4.0 + (3.0f64 * 1.5 + 0.2).sin() / 4.0;
        assert!((n.apply(0.2, 0.5, 1.5, &mut Constant(0.0)) - expected).abs() < 1e-12);
    }

    #[test]
    fn modular_wraps_into_bands() {
        let n = normalizer(SumFunction::Modular);
        let mut rng = Constant(0.0);
        assert!((n.apply(0.3, 0.0, 0.0, &mut rng) - 0.5).abs() < 1e-12);
        assert_eq!(n.apply(1.0, 0.0, 0.0, &mut rng), 0.0);
    }

    #[test]
    fn random_jitter_is_bounded_and_clamped() {
        let n = normalizer(SumFunction::Random);
        // draw 0.5 cancels the offset
        assert!((n.apply(0.4, 0.0, 0.0, &mut Constant(0.5)) - 0.4).abs() < 1e-12);
        // draw 0.0 shifts by -0.1
        assert!((n.apply(0.4, 0.0, 0.0, &mut Constant(0.0)) - 0.3).abs() < 1e-12);
        assert_eq!(n.apply(0.02, 0.0, 0.0, &mut Constant(0.0)), 0.0);
        assert_eq!(n.apply(0.99, 0.0, 0.0, &mut Constant(0.999)), 1.0);
    }

    #[test]
    fn random_draws_once_per_pixel() {
        struct Counting(usize);
        impl Random for Counting {
            fn next_f64(&mut self) -> f64 {
                self.0 += 1;
                0.5
            }
        }
        let mut rng = Counting(0);
        normalizer(SumFunction::Random)
            .normalize(&stripes_raw(4, 3), 1.0, &mut rng)
            .unwrap();
        assert_eq!(rng.0, 12);
    }

    #[test]
    fn non_random_functions_never_draw() {
        let mut rng = Xorshift64::from_seed_str("untouched");
        let mut reference = rng.clone();
        for (f, _) in SumFunction::ALL {
            if f == SumFunction::Random {
                continue;
            }
            normalizer(f).normalize(&stripes_raw(3, 3), 1.0, &mut rng).unwrap();
        }
        assert_eq!(rng.next_f64(), reference.next_f64());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn every_sum_function_stays_in_unit_interval(
                index in 0usize..6,
                v in 0.0f64..=1.0,
                sx in -1e3f64..1e3,
                sy in -1e3f64..1e3,
                amplitude in prop_oneof![-50.0f64..-0.01, 0.01f64..50.0],
                draw in 0.0f64..1.0,
            ) {
                let n = FieldNormalizer {
                    sum_function: SumFunction::ALL[index].0,
                    sine_frequency_coeff: 1.0,
                    sum_amplitude: amplitude,
                };
                let out = n.apply(v, sx, sy, &mut Constant(draw));
                prop_assert!((0.0..=1.0).contains(&out), "{} gave {out}", n.sum_function.name());
            }
        }
    }
}
