//! Conditional intensity and compensator for the exponential kernel.
//!
//! Purpose
//! -------
//! Provide the intensity math shared by the likelihood, the simulator, and
//! diagnostics:
//!
//! - the naive O(n) conditional intensity
//!   `λ(t) = μ + α · Σ_{t_i < t} exp(−β·(t − t_i))`,
//! - the closed-form compensator
//!   `Λ(0, T) = μ·T + (α/β)·Σ_i (1 − exp(−β·(T − t_i)))`,
//! - an O(1)-per-step running excitation term exploiting the Markov property
//!   `exp(−β(t−t_j)) = exp(−β(t−t_i))·exp(−β(t_i−t_j))` for `t_j < t_i < t`.
//!
//! Conventions
//! -----------
//! - `intensity_at` sums strictly over `t_i < t`: an event exactly at the
//!   query time does not contribute to its own intensity.
//! - The recursive form MUST be used by fitting and simulation; the naive
//!   form is the diagnostics/grid evaluator and the reference in tests.
use crate::hawkes::params::HawkesParams;
use ndarray::ArrayView1;

/// Naive O(n) conditional intensity λ(t) given a history of event times.
///
/// Sums over all history entries strictly before `t`; with no prior history
/// the result is exactly `μ`. The history is not required to be sorted here
/// (entries `>= t` are simply skipped), which lets grid evaluators pass a
/// full series and a moving query time.
pub fn intensity_at(params: &HawkesParams, history: ArrayView1<'_, f64>, t: f64) -> f64 {
    let excitation: f64 = history
        .iter()
        .filter(|&&ti| ti < t)
        .map(|&ti| (-params.beta * (t - ti)).exp())
        .sum();
    params.mu + params.alpha * excitation
}

/// Closed-form compensator Λ(0, T) = μ·T + (α/β)·Σ_i (1 − exp(−β·(T − t_i))).
///
/// Sums over all events with `t_i <= horizon`; each event's contribution to
/// the integral starts at its own arrival time, so the sum over the full
/// series is exact.
pub fn compensator(params: &HawkesParams, times: ArrayView1<'_, f64>, horizon: f64) -> f64 {
    let kernel_mass: f64 = times
        .iter()
        .filter(|&&ti| ti <= horizon)
        .map(|&ti| 1.0 - (-params.beta * (horizon - ti)).exp())
        .sum();
    params.mu * horizon + (params.alpha / params.beta) * kernel_mass
}

/// Running excitation sum `r(t) = α · Σ_{t_i < t} exp(−β·(t − t_i))`,
/// updated in O(1) per step.
///
/// The simulator decays the sum as the clock advances and bumps it by `α`
/// when an event is accepted; the likelihood uses the same recursion in its
/// own tight loop. `λ(t) = μ + r(t)` at all times.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Excitation {
    r: f64,
}

impl Excitation {
    /// Fresh excitation state with no prior events (`r = 0`).
    pub fn new() -> Self {
        Excitation { r: 0.0 }
    }

    /// Decay the sum by an elapsed gap `dt >= 0`: `r ← r·exp(−β·dt)`.
    pub fn decay(&mut self, beta: f64, dt: f64) {
        self.r *= (-beta * dt).exp();
    }

    /// Register an event at the current clock: `r ← r + α`.
    pub fn bump(&mut self, alpha: f64) {
        self.r += alpha;
    }

    /// Current excitation sum `r(t)`.
    pub fn value(&self) -> f64 {
        self.r
    }

    /// Conditional intensity `λ(t) = μ + r(t)` at the current clock.
    pub fn intensity(&self, mu: f64) -> f64 {
        mu + self.r
    }
}
