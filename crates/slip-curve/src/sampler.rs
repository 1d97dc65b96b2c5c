//! Sampling driver and purity metric.
//!
//! The driver walks a fixed index range at a fixed slip rate, collecting
//! `(index, init_rate * rate_modifier(index, slip_rate))` into a [`Series`].
//! Purity positions each sampled rate between the raw modifier values at the
//! two ends of the range.

use serde::{Deserialize, Serialize};
use slip_core::constants::{PURITY_SCALE, SAMPLE_END, SAMPLE_SLIP_RATE, SAMPLE_START};
use slip_core::error::CurveError;
use slip_core::traits::RateCalculator;
use slip_core::types::{Sample, Series};
use tracing::debug;

/// Reference values of the purity metric.
///
/// `high` and `low` are unscaled modifiers, while the rates fed to
/// [`PurityScale::purity`] carry the `init_rate` factor. The mix is kept
/// as-is, so purities of sampled rates land well above 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PurityScale {
    pub high: f64,
    pub low: f64,
}

impl PurityScale {
    pub fn new(high: f64, low: f64) -> Self {
        Self { high, low }
    }

    /// Scale taken from the curve at `low_index` and `high_index`.
    pub fn from_curve<C: RateCalculator + ?Sized>(
        curve: &C,
        low_index: u64,
        high_index: u64,
        slip_rate: u64,
    ) -> Self {
        Self {
            high: curve.rate_modifier(high_index, slip_rate),
            low: curve.rate_modifier(low_index, slip_rate),
        }
    }

    /// Integer percentage `(high - rate) * 100 / (high - low)`, truncated
    /// toward zero.
    pub fn purity(&self, rate: f64) -> Result<i64, CurveError> {
        let span = self.high - self.low;
        if span == 0.0 {
            return Err(CurveError::DegenerateScale {
                high: self.high,
                low: self.low,
            });
        }
        Ok(((self.high - rate) * PURITY_SCALE / span) as i64)
    }
}

/// Fixed-range sampler over a rate curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sampler {
    /// First index (inclusive).
    pub start: u64,
    /// Upper bound (exclusive).
    pub end: u64,
    /// Slip rate used for every sample.
    pub slip_rate: u64,
}

impl Default for Sampler {
    fn default() -> Self {
        Self {
            start: SAMPLE_START,
            end: SAMPLE_END,
            slip_rate: SAMPLE_SLIP_RATE,
        }
    }
}

/// Output of one sampling pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveRun {
    pub series: Series,
    pub scale: PurityScale,
    /// One purity per sample, in series order.
    pub purities: Vec<i64>,
}

impl CurveRun {
    /// Samples paired with their purity.
    pub fn iter(&self) -> impl Iterator<Item = (&Sample, i64)> + '_ {
        self.series.iter().zip(self.purities.iter().copied())
    }
}

impl Sampler {
    pub fn new(start: u64, end: u64, slip_rate: u64) -> Result<Self, CurveError> {
        if start >= end {
            return Err(CurveError::EmptyRange { start, end });
        }
        Ok(Self {
            start,
            end,
            slip_rate,
        })
    }

    /// Number of samples a pass produces.
    pub fn len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    fn check_range(&self) -> Result<(), CurveError> {
        if self.is_empty() {
            return Err(CurveError::EmptyRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Evaluate the scaled rate at every index of the range.
    pub fn sample<C: RateCalculator + ?Sized>(&self, curve: &C) -> Result<Series, CurveError> {
        self.check_range()?;

        let mut series = Series::with_capacity(usize::try_from(self.len()).unwrap_or_default());
        for i in self.start..self.end {
            let rate = curve.scaled_rate(i, self.slip_rate);
            debug!(index = i, rate, "sampled");
            series.push(Sample::new(i, rate));
        }
        Ok(series)
    }

    /// Purity scale over this range: low end at `start`, high end at `end - 1`.
    pub fn scale<C: RateCalculator + ?Sized>(&self, curve: &C) -> Result<PurityScale, CurveError> {
        self.check_range()?;
        Ok(PurityScale::from_curve(
            curve,
            self.start,
            self.end - 1,
            self.slip_rate,
        ))
    }

    /// Sample the curve and derive purity for every sample.
    pub fn run<C: RateCalculator + ?Sized>(&self, curve: &C) -> Result<CurveRun, CurveError> {
        let scale = self.scale(curve)?;
        let series = self.sample(curve)?;
        let purities = series
            .iter()
            .map(|s| scale.purity(s.rate))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            samples = series.len(),
            high = scale.high,
            low = scale.low,
            "curve run complete"
        );
        Ok(CurveRun {
            series,
            scale,
            purities,
        })
    }
}
