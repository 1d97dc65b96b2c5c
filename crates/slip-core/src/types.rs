//! Sampled curve data and plot descriptors.

use serde::{Deserialize, Serialize};

use crate::constants::{PLOT_TITLE, X_LABEL, Y_LABEL};

/// One sampled point of the curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Sampled index, starting at 1.
    pub index: u64,
    /// Scaled rate, in `[0, init_rate)`.
    pub rate: f64,
}

impl Sample {
    pub fn new(index: u64, rate: f64) -> Self {
        Self { index, rate }
    }

    /// The sample as an `(x, y)` plot coordinate.
    pub fn point(&self) -> (f64, f64) {
        (self.index as f64, self.rate)
    }
}

/// Ordered samples, in index order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series(Vec<Sample>);

impl Series {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub fn push(&mut self, sample: Sample) {
        self.0.push(sample);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&Sample> {
        self.0.first()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.0.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.0.iter()
    }

    /// `(x, y)` coordinates for a plot sink.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.0.iter().map(Sample::point)
    }

    /// Smallest and largest rate in the series, `None` when empty.
    pub fn rate_bounds(&self) -> Option<(f64, f64)> {
        let mut iter = self.0.iter().map(|s| s.rate);
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), r| (lo.min(r), hi.max(r))))
    }
}

impl FromIterator<Sample> for Series {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Axis and chart titles handed to a plot sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotLabels {
    pub x_axis: String,
    pub y_axis: String,
    pub title: String,
}

impl Default for PlotLabels {
    fn default() -> Self {
        Self {
            x_axis: X_LABEL.to_string(),
            y_axis: Y_LABEL.to_string(),
            title: PLOT_TITLE.to_string(),
        }
    }
}

/// Marker style for scatter points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Marker {
    /// Plus-shaped marker, no connecting line.
    #[default]
    Plus,
}

impl Marker {
    /// Single-character style token.
    pub fn token(&self) -> char {
        match self {
            Self::Plus => '+',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> Series {
        [(1, 0.025), (2, 0.036), (3, 0.046)]
            .into_iter()
            .map(|(i, r)| Sample::new(i, r))
            .collect()
    }

    #[test]
    fn series_keeps_insertion_order() {
        let s = series();
        let indices: Vec<u64> = s.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert_eq!(s.first().unwrap().index, 1);
        assert_eq!(s.last().unwrap().index, 3);
    }

    #[test]
    fn points_use_index_as_x() {
        let pts: Vec<(f64, f64)> = series().points().collect();
        assert_eq!(pts[0], (1.0, 0.025));
        assert_eq!(pts[2], (3.0, 0.046));
    }

    #[test]
    fn rate_bounds_of_empty_series() {
        assert_eq!(Series::new().rate_bounds(), None);
        assert!(Series::new().is_empty());
    }

    #[test]
    fn rate_bounds_of_series() {
        assert_eq!(series().rate_bounds(), Some((0.025, 0.046)));
    }

    #[test]
    fn default_labels_keep_reference_strings() {
        let labels = PlotLabels::default();
        assert_eq!(labels.x_axis, "supply");
        assert_eq!(labels.y_axis, "purity");
        assert_eq!(labels.title, "A simple line graph");
    }

    #[test]
    fn plus_marker_token() {
        assert_eq!(Marker::default().token(), '+');
    }

    #[test]
    fn series_serializes_as_array() {
        let json = serde_json::to_string(&series()).unwrap();
        assert!(json.starts_with("[{\"index\":1,"));
    }
}
