//! Seams between the curve, the sampling driver and the output sink.

use crate::error::PlotError;
use crate::types::{Marker, PlotLabels, Series};

/// Pure computation of the rate modifier curve.
///
/// The curve maps an index `n` and a slip rate to a multiplier in `[0, 1)`.
/// Implemented by the rate curve engine (slip-curve).
pub trait RateCalculator: Send + Sync {
    /// Bounded multiplier for index `n` at the given slip rate.
    ///
    /// Returns exactly `0.0` for `n == 0` and exactly `1.0` for
    /// `slip_rate == 0` (with `n > 0`).
    fn rate_modifier(&self, n: u64, slip_rate: u64) -> f64;

    /// Scale factor applied on top of the modifier when sampling.
    fn init_rate(&self) -> f64;

    /// Sampled rate: `init_rate * rate_modifier(n, slip_rate)`.
    fn scaled_rate(&self, n: u64, slip_rate: u64) -> f64 {
        self.init_rate() * self.rate_modifier(n, slip_rate)
    }
}

/// Terminal consumer of a sampled series.
///
/// Renders `(index, rate)` pairs as a 2D scatter plot with the given labels
/// and marker style. Display failures are returned, never swallowed.
pub trait PlotSink {
    fn render(
        &mut self,
        series: &Series,
        labels: &PlotLabels,
        marker: Marker,
    ) -> Result<(), PlotError>;
}
