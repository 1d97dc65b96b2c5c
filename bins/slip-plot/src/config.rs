//! Output configuration for the plot binary.
//!
//! Only the output surface and logging are configurable. The curve itself
//! always runs with its built-in constants.

use std::path::PathBuf;

use anyhow::{bail, Result};

/// Default SVG output file.
pub const DEFAULT_OUTPUT: &str = "rate_curve.svg";
/// Default figure width in pixels.
pub const DEFAULT_WIDTH: u32 = 800;
/// Default figure height in pixels.
pub const DEFAULT_HEIGHT: u32 = 600;

#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Path of the rendered figure.
    pub output: PathBuf,
    /// Figure width in pixels.
    pub width: u32,
    /// Figure height in pixels.
    pub height: u32,
    /// Log level filter string (e.g. "info", "debug", "slip_curve=trace").
    pub log_level: String,
    /// Print the sampled run as JSON on stdout.
    pub dump: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            log_level: "info".to_string(),
            dump: false,
        }
    }
}

impl PlotConfig {
    /// `(width, height)` for the drawing backend.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Reject a zero-sized figure.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            bail!(
                "figure dimensions must be non-zero, got {}x{}",
                self.width,
                self.height
            );
        }
        Ok(())
    }
}
