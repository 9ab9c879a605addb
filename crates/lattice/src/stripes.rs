//! Stateless diagonal ramps.
//!
//! Neither kernel draws from the generator; both are typically paired with
//! the `modular` sum function to produce repeating bands.

use crate::smoothing::Smoothing;
use crate::Noise2D;

/// `x / 5 + y / 5`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stripes;

impl Noise2D for Stripes {
    #[inline]
    fn sample(&self, x: f64, y: f64) -> f64 {
        x / 5.0 + y / 5.0
    }
}

/// `smooth(x) / 5 + smooth(y) / 5`, smoothing applied to the raw coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmoothedStripes {
    smoothing: Smoothing,
}

impl SmoothedStripes {
    pub fn new(smoothing: Smoothing) -> Self {
        Self { smoothing }
    }
}

impl Noise2D for SmoothedStripes {
    #[inline]
    fn sample(&self, x: f64, y: f64) -> f64 {
        self.smoothing.apply(x) / 5.0 + self.smoothing.apply(y) / 5.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stripes_are_linear_in_both_axes() {
        assert_eq!(Stripes.sample(0.0, 0.0), 0.0);
        assert!((Stripes.sample(10.0, 0.0) - 2.0).abs() < 1e-12);
        assert!((Stripes.sample(2.5, 2.5) - 1.0).abs() < 1e-12);
        assert!((Stripes.sample(-5.0, 5.0)).abs() < 1e-12);
    }

    #[test]
    fn smoothed_stripes_with_identity_match_stripes() {
        let smoothed = SmoothedStripes::new(Smoothing::None);
        for (x, y) in [(0.3, 0.9), (4.0, -2.0), (17.5, 3.25)] {
            assert!((smoothed.sample(x, y) - Stripes.sample(x, y)).abs() < 1e-12);
        }
    }

    #[test]
    fn smoothed_stripes_apply_the_curve_per_axis() {
        let smoothed = SmoothedStripes::new(Smoothing::EaseOutQuad);
        let expected = (0.5f64 * 0.5) / 5.0 + (0.25f64 * 0.25) / 5.0;
        assert!((smoothed.sample(0.5, 0.25) - expected).abs() < 1e-12);
    }
}
