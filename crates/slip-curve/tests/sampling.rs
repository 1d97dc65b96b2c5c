//! End-to-end sampling of the demonstration curve.
//!
//! Runs the default sampler over the default curve and checks the series the
//! plot sink receives, along with the purity values derived alongside it.

use slip_core::constants::{INIT_RATE, MAX_EXPONENT, SAMPLE_END, SAMPLE_START};
use slip_core::traits::RateCalculator;
use slip_curve::{CurveParams, PurityScale, RateCurve, Sampler};

fn default_run() -> slip_curve::CurveRun {
    Sampler::default().run(&RateCurve::default()).unwrap()
}

#[test]
fn series_has_49_samples() {
    let run = default_run();
    assert_eq!(run.series.len(), 49);
    assert_eq!(run.series.first().unwrap().index, SAMPLE_START);
    assert_eq!(run.series.last().unwrap().index, SAMPLE_END - 1);
}

#[test]
fn first_rate_is_quarter_of_init_rate() {
    let run = default_run();
    let first = run.series.first().unwrap();
    assert!((first.rate - 0.025).abs() < 1e-15, "rate = {}", first.rate);
}

#[test]
fn last_rate_tracks_upper_bound_modifier() {
    let curve = RateCurve::default();
    let run = default_run();
    let last = run.series.last().unwrap();
    assert_eq!(last.rate, INIT_RATE * curve.rate_modifier(49, 1));
    assert!((last.rate - 0.1).abs() < 1e-8);
}

#[test]
fn series_is_non_decreasing_and_flat_past_cap() {
    let run = default_run();
    let rates: Vec<f64> = run.series.iter().map(|s| s.rate).collect();
    for w in rates.windows(2) {
        assert!(w[0] <= w[1]);
    }
    // indices 48 and 49 both sit on the capped exponent
    let cap_index = (MAX_EXPONENT + 1) as usize;
    assert_eq!(rates[cap_index - 1], rates[cap_index]);
}

#[test]
fn purity_matches_reference_formula() {
    let curve = RateCurve::default();
    let h = curve.rate_modifier(49, 1);
    let l = curve.rate_modifier(1, 1);
    let run = default_run();

    assert_eq!(run.scale, PurityScale::new(h, l));
    for (sample, purity) in run.iter() {
        let rate = INIT_RATE * curve.rate_modifier(sample.index, 1);
        assert_eq!(purity, ((h - rate) * 100.0 / (h - l)) as i64);
    }
}

#[test]
fn purity_of_scaled_rates_exceeds_full_scale() {
    // Rates carry the 0.1 factor while h and l do not.
    let run = default_run();
    assert!(run.purities.iter().all(|&p| p > 100));
    // (h - 0.025) * 100 / (h - 0.25) with h just under 1
    assert_eq!(run.purities[0], 130);
    assert_eq!(run.purities.last(), Some(&120));
}

#[test]
fn dyn_calculator_is_accepted() {
    let curve: Box<dyn RateCalculator> = Box::new(RateCurve::new(CurveParams::default()));
    let series = Sampler::default().sample(curve.as_ref()).unwrap();
    assert_eq!(series.len(), 49);
}
