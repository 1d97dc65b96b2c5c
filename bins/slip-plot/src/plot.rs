//! SVG scatter plot sink.
//!
//! Renders a [`Series`] with `plotters` into an SVG file. Each sample is drawn
//! as a red marker with no connecting line.

use std::fmt::Display;
use std::path::{Path, PathBuf};

use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use slip_core::error::PlotError;
use slip_core::traits::PlotSink;
use slip_core::types::{Marker, PlotLabels, Series};
use tracing::debug;

/// Half-length of a marker arm, in pixels.
const MARKER_ARM: i32 = 4;

/// Headroom above the largest rate, as a fraction of it.
const Y_HEADROOM: f64 = 0.1;

type Chart<'a, 'b> = ChartContext<'a, SVGBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

fn backend_err<E: Display>(err: E) -> PlotError {
    PlotError::Backend(err.to_string())
}

/// Writes the plot to an SVG file on every render.
#[derive(Debug, Clone)]
pub struct SvgPlotSink {
    path: PathBuf,
    dimensions: (u32, u32),
}

impl SvgPlotSink {
    pub fn new(path: impl Into<PathBuf>, dimensions: (u32, u32)) -> Self {
        Self {
            path: path.into(),
            dimensions,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn check_parent(&self) -> Result<(), PlotError> {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() && !dir.is_dir() => Err(PlotError::Io(
                format!("output directory {} does not exist", dir.display()),
            )),
            _ => Ok(()),
        }
    }
}

/// Axis ranges: one index of padding on x, zero to rate headroom on y.
fn axis_ranges(series: &Series) -> Option<((f64, f64), (f64, f64))> {
    let first = series.first()?.index as f64;
    let last = series.last()?.index as f64;
    let (_, max_rate) = series.rate_bounds()?;

    let y_max = if max_rate > 0.0 {
        max_rate * (1.0 + Y_HEADROOM)
    } else {
        1.0
    };
    Some(((first - 1.0, last + 1.0), (0.0, y_max)))
}

fn draw_plus_markers(chart: &mut Chart<'_, '_>, series: &Series) -> Result<(), PlotError> {
    let style = RED.stroke_width(1);
    chart
        .draw_series(series.points().map(|p| {
            EmptyElement::at(p)
                + PathElement::new(vec![(-MARKER_ARM, 0), (MARKER_ARM, 0)], style)
                + PathElement::new(vec![(0, -MARKER_ARM), (0, MARKER_ARM)], style)
        }))
        .map_err(backend_err)?;
    Ok(())
}

impl PlotSink for SvgPlotSink {
    fn render(
        &mut self,
        series: &Series,
        labels: &PlotLabels,
        marker: Marker,
    ) -> Result<(), PlotError> {
        let ((x_min, x_max), (y_min, y_max)) = axis_ranges(series).ok_or(PlotError::EmptySeries)?;
        self.check_parent()?;

        let root = SVGBackend::new(&self.path, self.dimensions).into_drawing_area();
        root.fill(&WHITE).map_err(backend_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&labels.title, ("sans-serif", 20))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(backend_err)?;

        chart
            .configure_mesh()
            .x_desc(labels.x_axis.as_str())
            .y_desc(labels.y_axis.as_str())
            .draw()
            .map_err(backend_err)?;

        match marker {
            Marker::Plus => draw_plus_markers(&mut chart, series)?,
        }

        root.present().map_err(backend_err)?;
        debug!(
            path = %self.path.display(),
            points = series.len(),
            marker = %marker.token(),
            "plot rendered"
        );
        Ok(())
    }
}
