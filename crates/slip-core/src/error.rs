//! Error types for the slip rate curve.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    #[error("invalid exponential base: {0} (must be finite and > 1)")] InvalidBase(f64),
    #[error("invalid modifier exponent: {0} (must be >= 1)")] InvalidExponent(i32),
    #[error("invalid init rate: {0} (must be finite and >= 0)")] InvalidInitRate(f64),
    #[error("empty sample range: {start}..{end}")] EmptyRange { start: u64, end: u64 },
    #[error("degenerate purity scale: high {high} == low {low}")] DegenerateScale { high: f64, low: f64 },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistributionError {
    #[error("rate of item {name} must satisfy 0 < rate < 1, got {rate}")] InvalidRate { name: String, rate: f64 },
    #[error("total rate greater than 1: {0}")] TotalRateExceeded(f64),
    #[error("item type index out of range: {index} >= {len}")] IndexOutOfRange { index: usize, len: usize },
    #[error("empty selection range")] EmptySelectionRange,
    #[error(transparent)] Curve(#[from] CurveError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlotError {
    #[error("nothing to plot: empty series")] EmptySeries,
    #[error("rendering backend: {0}")] Backend(String),
    #[error("io: {0}")] Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_error_display() {
        let err = CurveError::EmptyRange { start: 5, end: 5 };
        assert_eq!(err.to_string(), "empty sample range: 5..5");
    }

    #[test]
    fn degenerate_scale_reports_both_ends() {
        let msg = CurveError::DegenerateScale { high: 0.5, low: 0.5 }.to_string();
        assert!(msg.contains("0.5"));
    }

    #[test]
    fn distribution_error_wraps_curve_error() {
        let err: DistributionError = CurveError::DegenerateScale { high: 1.0, low: 1.0 }.into();
        assert_eq!(err.to_string(), "degenerate purity scale: high 1 == low 1");
        assert!(matches!(err, DistributionError::Curve(_)));
    }

    #[test]
    fn invalid_rate_names_item() {
        let err = DistributionError::InvalidRate {
            name: "rare".to_string(),
            rate: 1.5,
        };
        assert!(err.to_string().contains("rare"));
    }
}
