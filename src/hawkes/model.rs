//! Univariate Hawkes model: MLE fitting and branching-ratio queries.
//!
//! Purpose
//! -------
//! Wire the exponential-kernel Hawkes likelihood to the `LogLikelihood`
//! trait and orchestrate the fit: defensive data validation, heuristic
//! seeding, the unconstrained softplus parameter map, the Argmin L-BFGS run,
//! and the fail-soft handling of non-convergence.
//!
//! Key ideas:
//! - The optimizer works in unconstrained θ-space; [`HawkesParams::from_theta`]
//!   keeps every trial bundle above the positivity floor, and the likelihood's
//!   sentinel penalty backs that up.
//! - Non-convergence is not fatal: the best-found parameters are kept and the
//!   solver's status is surfaced through the stored [`OptimOutcome`], so a
//!   caller can flag low-confidence fits without the fit aborting.
//! - Gradients are finite-differenced by the optimizer adapter; no analytic
//!   gradient is supplied.
use crate::{
    hawkes::{
        data::EventSeries,
        errors::{HawkesError, HawkesResult},
        loglik::neg_log_likelihood,
        params::{HawkesParams, N_PARAMS, PARAM_FLOOR},
    },
    optimization::{
        errors::{OptError, OptResult},
        loglik_optimizer::{maximize, LogLikelihood, MLEOptions, OptimOutcome, Theta},
    },
};
use ndarray::Array1;

/// Fixed heuristic seed for the excitation weight.
const ALPHA_SEED: f64 = 0.1;

/// Fixed heuristic seed for the decay rate.
const BETA_SEED: f64 = 1.0;

/// Univariate Hawkes model with MLE fitting over `(μ, α, β)`.
///
/// Holds the optimizer configuration and, after [`HawkesModel::fit`], the
/// fitted parameters plus the full optimization outcome (value, convergence
/// status, iteration and evaluation counts).
///
/// # Notes
/// - Each `fit` call is a pure function of its inputs plus `mle_opts`; there
///   is no hidden state shared between calls, so independent models can be
///   fitted concurrently.
/// - Implements [`LogLikelihood`] so it plugs directly into the Argmin-based
///   optimizer layer.
#[derive(Debug, Clone, PartialEq)]
pub struct HawkesModel {
    /// Optimizer configuration (tolerances, line search, verbosity).
    pub mle_opts: MLEOptions,
    /// Fit results (populated after `fit`), including convergence status.
    pub results: Option<OptimOutcome>,
    /// Fitted parameters (populated after `fit`).
    pub fitted_params: Option<HawkesParams>,
}

impl Default for HawkesModel {
    fn default() -> Self {
        HawkesModel::new(MLEOptions::default())
    }
}

impl HawkesModel {
    /// Construct an unfitted model with the given optimizer options.
    pub fn new(mle_opts: MLEOptions) -> Self {
        HawkesModel { mle_opts, results: None, fitted_params: None }
    }

    /// Fit `(μ, α, β)` to raw timestamps by maximum likelihood.
    ///
    /// ## Steps
    /// 1. Validate and defensively sort the input into an [`EventSeries`]
    ///    (empty input fails fast, duplicates are permitted).
    /// 2. Seed the search with `μ₀ = 0.5·n/T`, `α₀ = 0.1`, `β₀ = 1.0` and map
    ///    the seed into θ-space.
    /// 3. Run L-BFGS on the negative log-likelihood per `self.mle_opts`.
    /// 4. Keep whatever parameter vector the solver returns — including on
    ///    non-convergence — and store the outcome in `self.results`.
    ///
    /// ## Returns
    /// The fitted [`HawkesParams`] (also cached in `self.fitted_params`).
    ///
    /// ## Errors
    /// - Propagates [`EventSeries`] validation failures.
    /// - [`HawkesError::OptimizationFailed`] only for hard solver errors
    ///   (e.g., a line search that cannot produce any iterate); reaching the
    ///   iteration cap is a soft outcome reported via `results`, not an
    ///   error.
    pub fn fit(&mut self, timestamps: Array1<f64>) -> HawkesResult<HawkesParams> {
        let series = EventSeries::new(timestamps)?;
        let n = series.len() as f64;
        // A lone event at t = 0 gives T = 0; floor it so the seed stays finite.
        let horizon = series.last().max(PARAM_FLOOR);
        let seed = HawkesParams::new(0.5 * n / horizon, ALPHA_SEED, BETA_SEED)?;

        let outcome = maximize(&*self, seed.to_theta(), &series, &self.mle_opts)
            .map_err(|e| HawkesError::OptimizationFailed { status: e.to_string() })?;
        let params = HawkesParams::from_theta(&outcome.theta_hat)
            .map_err(|e| HawkesError::OptimizationFailed { status: e.to_string() })?;

        self.results = Some(outcome);
        self.fitted_params = Some(params);
        Ok(params)
    }

    /// Branching ratio `α/β` of the fitted model.
    ///
    /// ## Errors
    /// - [`HawkesError::ModelNotFitted`] if called before a successful `fit`.
    pub fn branching_ratio(&self) -> HawkesResult<f64> {
        let params = self.fitted_params.as_ref().ok_or(HawkesError::ModelNotFitted)?;
        Ok(params.branching_ratio())
    }
}

impl LogLikelihood for HawkesModel {
    type Data = EventSeries;

    /// Log-likelihood `ℓ(θ)` at an unconstrained parameter vector.
    ///
    /// Maps `θ → (μ, α, β)` through the floored softplus and negates the
    /// recursive negative log-likelihood. Infeasible bundles (unreachable
    /// through the map, but guarded anyway) surface as the sentinel penalty,
    /// which stays finite for the line search.
    fn value(&self, theta: &Theta, data: &Self::Data) -> OptResult<f64> {
        let params = HawkesParams::from_theta(theta)?;
        Ok(-neg_log_likelihood(params.mu, params.alpha, params.beta, data.view()))
    }

    /// Validate an unconstrained parameter vector: length 3, all finite.
    fn check(&self, theta: &Theta, _data: &Self::Data) -> OptResult<()> {
        if theta.len() != N_PARAMS {
            return Err(OptError::ThetaLengthMismatch {
                expected: N_PARAMS,
                actual: theta.len(),
            });
        }
        for (index, &value) in theta.iter().enumerate() {
            if !value.is_finite() {
                return Err(OptError::InvalidThetaInput { index, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hawkes::loglik::neg_log_likelihood;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Failure modes of `fit` and `branching_ratio` (empty input, queries
    //   before fitting).
    // - The degenerate single-timestamp fit.
    // - Consistency of the `LogLikelihood` implementation with the raw
    //   negative log-likelihood.
    //
    // They intentionally DO NOT cover:
    // - Statistical parameter recovery, which lives in the integration suite.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that fitting an empty series fails fast with `EmptySeries`
    // and leaves the model unfitted.
    //
    // Given
    // -----
    // - An empty timestamp array.
    //
    // Expect
    // ------
    // - `fit` returns `Err(HawkesError::EmptySeries)`.
    // - `fitted_params` and `results` stay `None`.
    fn fit_rejects_empty_input() {
        let mut model = HawkesModel::default();

        let result = model.fit(array![]);

        assert_eq!(result.unwrap_err(), HawkesError::EmptySeries);
        assert!(model.fitted_params.is_none());
        assert!(model.results.is_none());
    }

    #[test]
    // Purpose
    // -------
    // Verify that querying the branching ratio before fitting fails with
    // `ModelNotFitted` rather than returning a silent default.
    //
    // Given
    // -----
    // - A freshly constructed model.
    //
    // Expect
    // ------
    // - `branching_ratio` returns `Err(HawkesError::ModelNotFitted)`.
    fn branching_ratio_requires_fit() {
        let model = HawkesModel::default();

        assert_eq!(model.branching_ratio().unwrap_err(), HawkesError::ModelNotFitted);
    }

    #[test]
    // Purpose
    // -------
    // Verify that a single-timestamp series is accepted (degenerate but
    // legal) and produces a valid, queryable parameter bundle.
    //
    // Given
    // -----
    // - `timestamps = [3.0]`.
    //
    // Expect
    // ------
    // - `fit` returns `Ok` with a bundle satisfying the domain constraints.
    // - `branching_ratio` is non-negative afterward.
    fn fit_accepts_single_timestamp() {
        let mut model = HawkesModel::default();

        let params = model.fit(array![3.0]).expect("degenerate fit should not error");

        assert!(params.mu > 0.0);
        assert!(params.alpha >= 0.0);
        assert!(params.beta > 0.0);
        assert!(model.branching_ratio().unwrap() >= 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Verify that `LogLikelihood::value` is the negated recursive negative
    // log-likelihood evaluated at the softplus-mapped parameters.
    //
    // Given
    // -----
    // - A small series and θ = to_theta((0.5, 0.8, 1.2)).
    //
    // Expect
    // ------
    // - `value(θ)` equals `−neg_log_likelihood(from_theta(θ))` within 1e-12.
    fn value_negates_recursive_nll() {
        let model = HawkesModel::default();
        let series = EventSeries::new(array![0.5, 1.5, 2.0]).unwrap();
        let theta = HawkesParams::new(0.5, 0.8, 1.2).unwrap().to_theta();

        let value = model.value(&theta, &series).unwrap();

        let mapped = HawkesParams::from_theta(&theta).unwrap();
        let expected =
            -neg_log_likelihood(mapped.mu, mapped.alpha, mapped.beta, series.view());
        assert!((value - expected).abs() < 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Verify that `check` rejects wrong-length and non-finite θ vectors.
    //
    // Given
    // -----
    // - A 2-element θ and a 3-element θ containing NaN.
    //
    // Expect
    // ------
    // - `ThetaLengthMismatch` and `InvalidThetaInput` respectively.
    fn check_validates_theta() {
        let model = HawkesModel::default();
        let series = EventSeries::new(array![1.0]).unwrap();

        let short = model.check(&array![0.0, 0.0], &series).unwrap_err();
        let non_finite = model.check(&array![0.0, f64::NAN, 0.0], &series).unwrap_err();

        assert_eq!(short, OptError::ThetaLengthMismatch { expected: 3, actual: 2 });
        assert!(matches!(non_finite, OptError::InvalidThetaInput { index: 1, .. }));
    }
}
