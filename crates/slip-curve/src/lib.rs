//! # slip-curve — Saturating rate modifier curve.
//!
//! This crate implements the rate modifier transform and the driver that
//! samples it:
//! - **Squared logistic curve**: `(1 / (1 + E^(-d)))^2` where the decay
//!   exponent `d` advances with `n / slip_rate`, shifted down by one and
//!   capped at `MAX_EXPONENT`.
//! - **Sampling driver**: evaluates the scaled rate over a fixed index range
//!   at a fixed slip rate and collects the series.
//! - **Purity metric**: positions each sampled rate between the curve's
//!   values at the lower and upper ends of the range, as an integer
//!   percentage.
//! - **Rate distribution**: item types whose draw probability decays along
//!   the curve as their supply is consumed, with bucket-based selection and a
//!   per-item purity.

pub mod curve;
pub mod distribution;
pub mod params;
pub mod sampler;

pub use curve::RateCurve;
pub use distribution::{ItemType, ItemTypeInit, RateDistribution};
pub use params::CurveParams;
pub use sampler::{CurveRun, PurityScale, Sampler};
