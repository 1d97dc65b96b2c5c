//! Rate curve implementing the [`RateCalculator`] trait.
//!
//! The modifier is a squared logistic in the decay exponent `d`:
//!
//! ```text
//! d = n / slip_rate              (integer division)
//! d = min(d, max) or d - 1       (shift only for 0 < d <= max)
//! m = (1 / (1 + base^(-d)))^exponent
//! ```
//!
//! With the default parameters `m` starts at 0.25 for `d = 0` and approaches
//! 1 from below as `d` grows, flattening once `d` hits the cap.

use slip_core::traits::RateCalculator;

use crate::params::CurveParams;

/// The rate modifier curve.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RateCurve {
    params: CurveParams,
}

impl RateCurve {
    /// Create a curve over the given parameters.
    pub fn new(params: CurveParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &CurveParams {
        &self.params
    }

    /// Decay exponent `d` for `n` at the given slip rate.
    ///
    /// Returns `None` for the two guarded cases (`n == 0`, `slip_rate == 0`)
    /// where the modifier is a fixed sentinel and no exponent exists.
    ///
    /// The shift by one only applies to `0 < d <= max_exponent`; a zero ratio
    /// stays zero and anything above the cap is clamped to the cap.
    pub fn decay_exponent(&self, n: u64, slip_rate: u64) -> Option<u64> {
        if n == 0 || slip_rate == 0 {
            return None;
        }

        let d = n / slip_rate;
        let d = if d > self.params.max_exponent {
            self.params.max_exponent
        } else if d > 0 {
            d - 1
        } else {
            d
        };
        Some(d)
    }

    /// Squared logistic term for a given decay exponent.
    fn modifier_at(&self, d: u64) -> f64 {
        let epow = self.params.base.powf(-(d as f64));
        (1.0 / (1.0 + epow)).powi(self.params.exponent)
    }
}

impl RateCalculator for RateCurve {
    fn rate_modifier(&self, n: u64, slip_rate: u64) -> f64 {
        match self.decay_exponent(n, slip_rate) {
            Some(d) => self.modifier_at(d),
            None if n == 0 => 0.0,
            // slip_rate == 0: no decay
            None => 1.0,
        }
    }

    fn init_rate(&self) -> f64 {
        self.params.init_rate
    }
}
