//! Parameter bundle for the univariate Hawkes process.
//!
//! Purpose
//! -------
//! Represent the three scalars of the exponential-kernel Hawkes model —
//! baseline rate `μ`, excitation weight `α`, and decay rate `β` — as an
//! immutable, boundary-validated value type, together with the mappings
//! between model space and the unconstrained optimizer space `θ ∈ ℝ³`.
//!
//! Key behaviors
//! -------------
//! - [`HawkesParams::new`] validates `μ > 0`, `α ≥ 0`, `β > 0` (all finite)
//!   at construction time; callers never need to re-check fields.
//! - [`HawkesParams::branching_ratio`] derives `n = α/β`, the expected number
//!   of child events per parent; the process is stationary iff `n < 1`.
//! - [`HawkesParams::from_theta`] / [`HawkesParams::to_theta`] map between
//!   model space and optimizer space via a floored softplus, keeping every
//!   parameter at least [`PARAM_FLOOR`] during the search. This is how the
//!   lower box bound is enforced with an unconstrained L-BFGS.
//!
//! Invariants & assumptions
//! ------------------------
//! - A constructed `HawkesParams` always satisfies the domain constraints;
//!   the type is `Copy` and never mutated after construction.
//! - `from_theta` is total on finite θ and always yields valid parameters.
use crate::{
    hawkes::errors::{HawkesError, HawkesResult},
    optimization::{
        errors::{OptError, OptResult},
        loglik_optimizer::Theta,
        numerical_stability::transformations::{safe_softplus, safe_softplus_inv},
    },
};
use ndarray::Array1;

/// Lower bound kept on every parameter during estimation.
///
/// The likelihood involves `ln(μ)` and divisions by `β`, so fitted
/// parameters are floored at a small positive epsilon rather than allowed to
/// touch zero. Matches the "lower bound ε, no upper bound" box constraint of
/// the MLE search.
pub const PARAM_FLOOR: f64 = 1e-5;

/// Number of free parameters of the univariate model: `(μ, α, β)`.
pub const N_PARAMS: usize = 3;

/// Validated parameter bundle `(μ, α, β)` for a univariate Hawkes process.
///
/// Fields
/// ------
/// - `mu`: baseline (exogenous) event rate, `> 0`.
/// - `alpha`: excitation weight per past event, `≥ 0`.
/// - `beta`: exponential decay rate of excitation, `> 0`.
///
/// Invariants
/// ----------
/// - All fields are finite and satisfy the bounds above; enforced by
///   [`HawkesParams::new`] and preserved by `from_theta`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HawkesParams {
    /// Baseline (exogenous) event rate.
    pub mu: f64,
    /// Excitation weight per past event.
    pub alpha: f64,
    /// Exponential decay rate of excitation.
    pub beta: f64,
}

impl HawkesParams {
    /// Construct a validated parameter bundle.
    ///
    /// # Errors
    /// - [`HawkesError::InvalidMu`] if `mu` is non-finite or ≤ 0.
    /// - [`HawkesError::InvalidAlpha`] if `alpha` is non-finite or < 0.
    /// - [`HawkesError::InvalidBeta`] if `beta` is non-finite or ≤ 0.
    pub fn new(mu: f64, alpha: f64, beta: f64) -> HawkesResult<Self> {
        if !mu.is_finite() || mu <= 0.0 {
            return Err(HawkesError::InvalidMu { value: mu });
        }
        if !alpha.is_finite() || alpha < 0.0 {
            return Err(HawkesError::InvalidAlpha { value: alpha });
        }
        if !beta.is_finite() || beta <= 0.0 {
            return Err(HawkesError::InvalidBeta { value: beta });
        }
        Ok(HawkesParams { mu, alpha, beta })
    }

    /// Expected number of directly triggered child events per parent:
    /// `n = α/β`. Non-negative for any valid bundle; the process is
    /// theoretically stationary iff `n < 1`.
    pub fn branching_ratio(&self) -> f64 {
        self.alpha / self.beta
    }

    /// Whether the process is subcritical (`branching_ratio() < 1`).
    pub fn is_stationary(&self) -> bool {
        self.branching_ratio() < 1.0
    }

    /// Map an unconstrained optimizer vector `θ ∈ ℝ³` into model space.
    ///
    /// Each coordinate is transformed as `PARAM_FLOOR + softplus(θ_i)`, so
    /// the resulting bundle always satisfies the domain constraints no matter
    /// where the line search steps.
    ///
    /// # Errors
    /// - [`OptError::ThetaLengthMismatch`] if `theta.len() != 3`.
    pub fn from_theta(theta: &Theta) -> OptResult<Self> {
        if theta.len() != N_PARAMS {
            return Err(OptError::ThetaLengthMismatch {
                expected: N_PARAMS,
                actual: theta.len(),
            });
        }
        Ok(HawkesParams {
            mu: PARAM_FLOOR + safe_softplus(theta[0]),
            alpha: PARAM_FLOOR + safe_softplus(theta[1]),
            beta: PARAM_FLOOR + safe_softplus(theta[2]),
        })
    }

    /// Map this bundle into the unconstrained optimizer space, inverting
    /// [`HawkesParams::from_theta`]. Used to seed the search from heuristic
    /// initial guesses.
    ///
    /// Coordinates at or below [`PARAM_FLOOR`] (possible for `alpha = 0`)
    /// are nudged to the floor before inversion so the result stays finite.
    pub fn to_theta(&self) -> Theta {
        let invert = |x: f64| safe_softplus_inv((x - PARAM_FLOOR).max(PARAM_FLOOR));
        Array1::from_vec(vec![invert(self.mu), invert(self.alpha), invert(self.beta)])
    }
}
