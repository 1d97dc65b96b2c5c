//! slip-plot — sample the slip rate curve and render it.
//!
//! Evaluates the rate modifier over indices 1..49 at a slip rate of 1,
//! derives the purity of every sample, and writes the `(index, rate)` series
//! as an SVG scatter plot.

mod config;
mod plot;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use slip_core::traits::PlotSink;
use slip_core::types::{Marker, PlotLabels};
use slip_curve::{RateCurve, Sampler};
use tracing::info;

use crate::config::{PlotConfig, DEFAULT_HEIGHT, DEFAULT_OUTPUT, DEFAULT_WIDTH};
use crate::plot::SvgPlotSink;

/// CLI arguments. None of them touch the curve.
#[derive(Debug, Parser)]
#[command(name = "slip-plot")]
#[command(version, about = "Render the slip rate modifier curve", long_about = None)]
struct Args {
    /// Output SVG file.
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Figure width in pixels.
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u32,

    /// Figure height in pixels.
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Print the sampled run (series, purity scale, purities) as JSON.
    #[arg(long)]
    dump: bool,
}

impl From<Args> for PlotConfig {
    fn from(args: Args) -> Self {
        Self {
            output: args.output,
            width: args.width,
            height: args.height,
            log_level: args.log_level,
            dump: args.dump,
        }
    }
}

fn main() -> Result<()> {
    let config = PlotConfig::from(Args::parse());

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    info!("slip-plot v{}", env!("CARGO_PKG_VERSION"));
    config.validate()?;

    let curve = RateCurve::default();
    let run = Sampler::default()
        .run(&curve)
        .context("failed to sample rate curve")?;

    info!(
        samples = run.series.len(),
        high = run.scale.high,
        low = run.scale.low,
        "curve sampled"
    );

    if config.dump {
        let json = serde_json::to_string_pretty(&run).context("failed to serialize curve run")?;
        println!("{json}");
    }

    let mut sink = SvgPlotSink::new(&config.output, config.dimensions());
    sink.render(&run.series, &PlotLabels::default(), Marker::Plus)
        .with_context(|| format!("failed to render plot to {}", config.output.display()))?;

    info!(output = %sink.path().display(), "plot written");
    Ok(())
}
