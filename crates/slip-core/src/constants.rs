//! Curve constants. Fixed for the lifetime of the process.

/// Base of the exponential decay term `E^(-d)`.
pub const E: f64 = 1.5;

/// Integer power applied to the logistic term.
pub const RATE_MODIFY_EXPONENT: i32 = 2;

/// Saturation cap for the decay exponent.
///
/// Any `n / slip_rate` ratio above this value is clamped to it, so the curve
/// flattens out past `n = MAX_EXPONENT + 1` at a slip rate of 1.
pub const MAX_EXPONENT: u64 = 47;

/// Scale factor applied to the rate modifier when sampling.
pub const INIT_RATE: f64 = 0.1;

/// First sampled index (inclusive).
pub const SAMPLE_START: u64 = 1;

/// Upper sampling bound (exclusive). Indices run `SAMPLE_START..SAMPLE_END`.
pub const SAMPLE_END: u64 = 50;

/// Slip rate used for every sample of the demonstration curve.
pub const SAMPLE_SLIP_RATE: u64 = 1;

/// Percentage scale used by the purity metric.
pub const PURITY_SCALE: f64 = 100.0;

/// X-axis title of the rendered curve.
pub const X_LABEL: &str = "supply";

/// Y-axis title of the rendered curve.
///
/// The plotted values are rates, not purities. The label is kept as-is.
pub const Y_LABEL: &str = "purity";

/// Chart title of the rendered curve.
pub const PLOT_TITLE: &str = "A simple line graph";
