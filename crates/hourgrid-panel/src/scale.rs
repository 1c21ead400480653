//! Value normalization: raw measurements to cell opacity.

use serde::{Deserialize, Serialize};

/// Maps raw values onto [0, 1] opacity via a power-law curve.
///
/// The maximum is computed once per render over the whole value column, not
/// per cell. `opacity = (value / max) ^ exponent`, where the exponent shapes
/// the gradient (1.0 is linear, below 1 lifts small values, above 1
/// suppresses them).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntensityScale {
    max: f64,
    exponent: f64,
}

impl IntensityScale {
    /// Build a scale from the full value column. One O(n) max pass.
    #[must_use]
    pub fn from_values(values: &[f64], exponent: f64) -> Self {
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Self { max, exponent }
    }

    /// The maximum observed value.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// The configured gradient exponent.
    #[must_use]
    pub const fn exponent(&self) -> f64 {
        self.exponent
    }

    /// Compute the opacity for a raw value.
    ///
    /// An all-zero column (max == 0) yields 0.0 for every cell: the grid
    /// renders fully transparent instead of propagating 0/0 as NaN. A
    /// negative max is passed through unguarded; fractional powers of
    /// negative ratios may yield NaN, which the renderer does not treat
    /// as an error.
    #[must_use]
    pub fn opacity(&self, value: f64) -> f64 {
        if self.max == 0.0 {
            return 0.0;
        }
        (value / self.max).powf(self.exponent)
    }
}
