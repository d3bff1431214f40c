//! Integration tests for the Hawkes simulate → fit → diagnose pipeline.
//!
//! Purpose
//! -------
//! - Validate the end-to-end workflow: generate a path with Ogata thinning,
//!   refit `(μ, α, β)` by maximum likelihood, and classify the fitted
//!   branching ratio.
//! - Exercise realistic parameter regimes (subcritical excitation, long
//!   horizons, seeded randomness) rather than toy edge cases only.
//!
//! Coverage
//! --------
//! - `simulation::thinning`:
//!   - Distributional correctness of inter-arrival gaps in the Poisson
//!     regime (Kolmogorov–Smirnov against the exponential CDF).
//! - `hawkes::model::HawkesModel`:
//!   - Parameter recovery on simulated paths, including a large-sample run.
//!   - Error surface before fitting and on degenerate input.
//! - `diagnostics`:
//!   - Criticality classification of fitted ratios and intensity grids over
//!     fitted models.
//! - `optimization::loglik_optimizer`:
//!   - Use of L-BFGS + line search via `MLEOptions` and `Tolerances`.
//!
//! Exclusions
//! ----------
//! - Fine-grained validation of low-level building blocks (likelihood
//!   recursion, softplus transforms, solver wiring) — these are covered by
//!   unit tests.
//! - Exhaustive stress testing over extreme sample sizes and parameter
//!   grids — those belong in targeted performance and property tests.
use hawkes_process::{
    diagnostics::{intensity_grid, CriticalityTier},
    hawkes::{
        data::EventSeries,
        errors::HawkesError,
        model::HawkesModel,
        params::HawkesParams,
    },
    optimization::loglik_optimizer::{LineSearcher, MLEOptions, Tolerances},
    simulation::thinning::simulate,
};
use ndarray::{array, Array1};
use rand::{rngs::StdRng, SeedableRng};
use statrs::distribution::{ContinuousCDF, Exp};

/// Purpose
/// -------
/// Provide a stable, documented baseline `MLEOptions` configuration for
/// integration tests that should reflect "typical" user settings.
///
/// Configuration
/// -------------
/// - Optimizer tolerances (`Tolerances`):
///   - `tol_grad = Some(1e-6)`
///   - `tol_cost = None`
///   - `max_iter = Some(500)`
/// - Line search: `LineSearcher::MoreThuente`.
/// - Quiet (no solver observer), default L-BFGS memory.
///
/// Invariants
/// ----------
/// - Panics if the underlying constructors reject the supplied values; this
///   is treated as a test-time configuration error, not a runtime error
///   path under test.
fn default_mle_options() -> MLEOptions {
    let tols = Tolerances::new(Some(1e-6), None, Some(500))
        .expect("Tolerances::new should accept positive tolerances");
    MLEOptions::new(tols, LineSearcher::MoreThuente, false, None)
        .expect("MLEOptions::new should succeed with reasonable tolerances")
}

/// Purpose
/// -------
/// Compute the two-sided Kolmogorov–Smirnov statistic of a sample against
/// a reference CDF.
///
/// Parameters
/// ----------
/// - `sample`: Observations; sorted internally, must be non-empty.
/// - `cdf`: Reference cumulative distribution function.
///
/// Returns
/// -------
/// - `D_n = sup_x |F_n(x) − F(x)|` computed at the sample points, taking
///   both the left and right limits of the empirical CDF at each jump.
fn ks_statistic<F: Fn(f64) -> f64>(sample: &[f64], cdf: F) -> f64 {
    let mut sorted = sample.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let n = sorted.len() as f64;
    let mut d_max: f64 = 0.0;
    for (i, &x) in sorted.iter().enumerate() {
        let f = cdf(x);
        let upper = ((i as f64 + 1.0) / n - f).abs();
        let lower = (f - i as f64 / n).abs();
        d_max = d_max.max(upper).max(lower);
    }
    d_max
}

#[test]
// Purpose
// -------
// Verify distributional correctness of the thinning sampler in the Poisson
// regime: with alpha = 0 the inter-arrival gaps are IID Exponential(mu),
// so a Kolmogorov–Smirnov test against that CDF should not reject.
//
// Given
// -----
// - `mu = 2.0`, `alpha = 0`, `beta = 1.0`, horizon 1500, seed 11
//   (≈3000 events).
// - Gaps formed from consecutive event times (first gap measured from 0).
// - The Exponential(rate = 2.0) CDF from `statrs` as the reference.
//
// Expect
// ------
// - `D_n < 1.95 / sqrt(n)` — the asymptotic Kolmogorov critical value at
//   the 0.1% level. A sampler with the wrong gap distribution lands far
//   above this; a correct one falls below it for all but pathological
//   seeds.
fn poisson_regime_gaps_pass_kolmogorov_smirnov() {
    let params = HawkesParams::new(2.0, 0.0, 1.0).expect("valid Poisson parameters");
    let mut rng = StdRng::seed_from_u64(11);
    let events = simulate(&params, 1500.0, &mut rng).expect("simulation should succeed");
    assert!(events.len() > 2000, "expected a long path, got {} events", events.len());

    let mut gaps = Vec::with_capacity(events.len());
    let mut prev = 0.0;
    for &t in events.iter() {
        gaps.push(t - prev);
        prev = t;
    }

    let reference = Exp::new(2.0).expect("valid exponential rate");
    let d = ks_statistic(&gaps, |x| reference.cdf(x));
    let critical = 1.95 / (gaps.len() as f64).sqrt();
    assert!(d < critical, "KS statistic {d} exceeds critical value {critical}");
}

#[test]
// Purpose
// -------
// Round-trip a moderately sized subcritical path: simulate with known
// parameters, refit by MLE, and check that the fitted branching ratio is
// close to the truth and classified below the critical tier.
//
// Given
// -----
// - Generating parameters `mu = 0.5`, `alpha = 0.8`, `beta = 1.2`
//   (branching ratio 2/3), horizon 300, seed 42 (several hundred events).
// - Baseline `MLEOptions` from `default_mle_options()`.
//
// Expect
// ------
// - `fit` succeeds and stores an outcome.
// - The fitted branching ratio lies within ±0.15 of 2/3.
// - The fitted ratio does not classify as `Critical`.
fn fitted_branching_ratio_tracks_truth_on_moderate_path() {
    let truth = HawkesParams::new(0.5, 0.8, 1.2).expect("valid generating parameters");
    let mut rng = StdRng::seed_from_u64(42);
    let events = simulate(&truth, 300.0, &mut rng).expect("simulation should succeed");
    assert!(events.len() > 100, "expected a non-trivial path, got {} events", events.len());

    let mut model = HawkesModel::new(default_mle_options());
    model.fit(events).expect("fit should succeed on a simulated path");

    let ratio = model.branching_ratio().expect("ratio should be available after fit");
    let true_ratio = truth.branching_ratio();
    assert!(
        (ratio - true_ratio).abs() < 0.15,
        "fitted ratio {ratio} too far from true ratio {true_ratio}"
    );
    assert_ne!(CriticalityTier::from_branching_ratio(ratio), CriticalityTier::Critical);
}

#[test]
// Purpose
// -------
// Large-sample parameter recovery: with thousands of events every
// coordinate of the MLE should land near the generating value, not just
// the branching ratio.
//
// Given
// -----
// - Generating parameters `mu = 0.5`, `alpha = 0.8`, `beta = 1.2`,
//   horizon 3000, seed 7 (≈4500 events).
// - Baseline `MLEOptions`.
//
// Expect
// ------
// - Each of `mu`, `alpha`, `beta` within 20% relative error of the truth.
// - The stored optimization outcome reports a finite log-likelihood.
fn large_sample_mle_recovers_all_parameters() {
    let truth = HawkesParams::new(0.5, 0.8, 1.2).expect("valid generating parameters");
    let mut rng = StdRng::seed_from_u64(7);
    let events = simulate(&truth, 3000.0, &mut rng).expect("simulation should succeed");
    assert!(events.len() > 2000, "expected a long path, got {} events", events.len());

    let mut model = HawkesModel::new(default_mle_options());
    let fitted = model.fit(events).expect("fit should succeed on a long simulated path");

    let rel = |estimate: f64, target: f64| (estimate - target).abs() / target;
    assert!(rel(fitted.mu, truth.mu) < 0.2, "mu estimate {} off target {}", fitted.mu, truth.mu);
    assert!(
        rel(fitted.alpha, truth.alpha) < 0.2,
        "alpha estimate {} off target {}",
        fitted.alpha,
        truth.alpha
    );
    assert!(
        rel(fitted.beta, truth.beta) < 0.2,
        "beta estimate {} off target {}",
        fitted.beta,
        truth.beta
    );

    let outcome = model.results.as_ref().expect("outcome should be stored after fit");
    assert!(outcome.value.is_finite(), "stored log-likelihood should be finite");
}

#[test]
// Purpose
// -------
// Exercise the diagnostics layer on a fitted model: the intensity grid
// over the observation window should be well-formed and bounded below by
// the fitted baseline rate.
//
// Given
// -----
// - A simulated subcritical path (horizon 200, seed 9), refit by MLE.
// - A 256-point grid over `[0, 200]` evaluated at the fitted parameters.
//
// Expect
// ------
// - Grid and intensity arrays both have 256 entries.
// - Every intensity value is finite and ≥ the fitted `mu` (the excitation
//   sum is non-negative).
fn intensity_grid_over_fitted_model_is_well_formed() {
    let truth = HawkesParams::new(0.5, 0.8, 1.2).expect("valid generating parameters");
    let mut rng = StdRng::seed_from_u64(9);
    let events = simulate(&truth, 200.0, &mut rng).expect("simulation should succeed");

    let mut model = HawkesModel::new(default_mle_options());
    let fitted = model.fit(events.clone()).expect("fit should succeed");

    let series = EventSeries::new(events).expect("simulated path should validate");
    let (grid, intensities) =
        intensity_grid(&fitted, &series, 0.0, 200.0, 256).expect("grid request should succeed");

    assert_eq!(grid.len(), 256);
    assert_eq!(intensities.len(), 256);
    for &lambda in intensities.iter() {
        assert!(lambda.is_finite() && lambda >= fitted.mu - 1e-12);
    }
}

#[test]
// Purpose
// -------
// Walk the error surface of the public fitting API: empty input, queries
// before fitting, and the degenerate single-timestamp series.
//
// Given
// -----
// - An empty timestamp array, a fresh unfitted model, and `[3.0]`.
//
// Expect
// ------
// - `fit` on empty input fails with `EmptySeries`.
// - `branching_ratio` before any fit fails with `ModelNotFitted`.
// - A single-timestamp fit succeeds and yields a queryable non-negative
//   branching ratio.
fn fitting_api_error_surface_is_consistent() {
    let mut model = HawkesModel::new(default_mle_options());

    let empty: Array1<f64> = array![];
    assert_eq!(model.fit(empty).unwrap_err(), HawkesError::EmptySeries);
    assert_eq!(model.branching_ratio().unwrap_err(), HawkesError::ModelNotFitted);

    model.fit(array![3.0]).expect("single-timestamp fit should succeed");
    assert!(model.branching_ratio().expect("ratio after degenerate fit") >= 0.0);
}
