//! Explicit curve parameters.
//!
//! The transform never reads ambient state: every constant it needs is held
//! by a [`CurveParams`] value passed in at construction.

use serde::{Deserialize, Serialize};
use slip_core::constants::{E, INIT_RATE, MAX_EXPONENT, RATE_MODIFY_EXPONENT};
use slip_core::error::CurveError;

/// Immutable parameters of the rate modifier curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveParams {
    /// Base of the exponential decay term.
    pub base: f64,
    /// Power applied to the logistic term.
    pub exponent: i32,
    /// Saturation cap for the decay exponent.
    pub max_exponent: u64,
    /// Scale applied to the modifier when sampling.
    pub init_rate: f64,
}

impl Default for CurveParams {
    fn default() -> Self {
        Self {
            base: E,
            exponent: RATE_MODIFY_EXPONENT,
            max_exponent: MAX_EXPONENT,
            init_rate: INIT_RATE,
        }
    }
}

impl CurveParams {
    /// Validated parameters.
    ///
    /// `base` must be finite and strictly greater than 1 so that `base^(-d)`
    /// decays; `exponent` must be at least 1 to keep the modifier in
    /// `[0, 1)`; `init_rate` must be finite and non-negative.
    pub fn new(
        base: f64,
        exponent: i32,
        max_exponent: u64,
        init_rate: f64,
    ) -> Result<Self, CurveError> {
        if !base.is_finite() || base <= 1.0 {
            return Err(CurveError::InvalidBase(base));
        }
        if exponent < 1 {
            return Err(CurveError::InvalidExponent(exponent));
        }
        if !init_rate.is_finite() || init_rate < 0.0 {
            return Err(CurveError::InvalidInitRate(init_rate));
        }
        Ok(Self {
            base,
            exponent,
            max_exponent,
            init_rate,
        })
    }
}
