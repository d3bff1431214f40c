//! Negative log-likelihood of the univariate exponential-kernel Hawkes
//! process.
//!
//! Purpose
//! -------
//! Evaluate `−ℓ(μ, α, β)` on a sorted, non-empty event series for use by a
//! minimizing search. The evaluation is O(n): the compensator is a single
//! closed-form pass and the intensity sum uses the recursive excitation
//! update, which is the load-bearing performance property of the design.
//!
//! Key behaviors
//! -------------
//! - Infeasible parameters (`μ ≤ 0`, `α < 0`, `β ≤ 0`) return a large finite
//!   sentinel instead of an error, so a bounds-unaware optimizer can step
//!   outside the feasible region without aborting the search. The fit path
//!   additionally enforces the bounds through its softplus parameter map.
//! - The first event has no prior history, so its log-intensity contribution
//!   is exactly `ln(μ)`.
//!
//! Invariants & assumptions
//! ------------------------
//! - `times` is sorted ascending and non-empty; [`EventSeries`] guarantees
//!   this. Duplicate timestamps give `dt = 0` and are handled by the
//!   recursion without special cases.
//!
//! [`EventSeries`]: crate::hawkes::data::EventSeries
use crate::hawkes::{intensity::compensator, params::HawkesParams};
use ndarray::ArrayView1;

/// Large finite penalty returned for infeasible parameter vectors.
///
/// Finite on purpose: the optimizer can compare and back away from penalized
/// points, where an infinity or NaN would poison the line search.
pub const PENALTY: f64 = 1e9;

/// Negative log-likelihood `−ℓ(μ, α, β)` on a sorted event series.
///
/// # Steps
/// 1. Return [`PENALTY`] if `μ ≤ 0`, `α < 0`, or `β ≤ 0`.
/// 2. With `T` the last event time, compute the closed-form compensator
///    `Λ(0, T)` over all events.
/// 3. Accumulate `Σ ln λ(t_i)` with the O(1) recursion
///    `r ← exp(−β·dt)·(r + α)`, seeding `ln(μ)` for the first event; a
///    non-positive instantaneous intensity also returns [`PENALTY`].
/// 4. Return `−(Σ ln λ(t_i) − Λ(0, T))`.
pub fn neg_log_likelihood(mu: f64, alpha: f64, beta: f64, times: ArrayView1<'_, f64>) -> f64 {
    if mu <= 0.0 || alpha < 0.0 || beta <= 0.0 {
        return PENALTY;
    }

    let params = HawkesParams { mu, alpha, beta };
    let horizon = times[times.len() - 1];
    let integral_term = compensator(&params, times, horizon);

    let mut log_sum = mu.ln();
    let mut r = 0.0;
    for i in 1..times.len() {
        let dt = times[i] - times[i - 1];
        r = (-beta * dt).exp() * (r + alpha);
        let lam = mu + r;
        if lam <= 0.0 {
            return PENALTY;
        }
        log_sum += lam.ln();
    }

    -(log_sum - integral_term)
}
