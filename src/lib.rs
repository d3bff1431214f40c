//! hawkes_process — univariate Hawkes process simulation and estimation.
//!
//! Purpose
//! -------
//! Model clustered event arrivals (e.g., trade events in an order flow) as a
//! self-exciting point process with an exponential kernel. The crate provides
//! three capabilities:
//!
//! - **Simulation**: draw event timestamps over a finite horizon from known
//!   parameters via Ogata's thinning algorithm (`simulation`).
//! - **Estimation**: fit `(μ, α, β)` to observed timestamps by maximizing the
//!   exact log-likelihood with an Argmin-backed L-BFGS optimizer (`hawkes`).
//! - **Diagnostics**: evaluate the conditional intensity λ(t) over a grid and
//!   classify the fitted branching ratio into criticality tiers
//!   (`diagnostics`).
//!
//! Key behaviors
//! -------------
//! - The conditional intensity is
//!   `λ(t) = μ + α · Σ_{t_i < t} exp(−β·(t − t_i))` with closed-form
//!   compensator `Λ(0, T) = μ·T + (α/β)·Σ_i (1 − exp(−β·(T − t_i)))`.
//! - Likelihood evaluation exploits the Markov property of the exponential
//!   kernel, so each event costs O(1) instead of O(n).
//! - The branching ratio `n = α/β` summarizes stability: the process is
//!   stationary iff `n < 1`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Parameters satisfy `μ > 0`, `α ≥ 0`, `β > 0`; construction validates
//!   these at the boundary and the fit path keeps them above a small floor.
//! - Event series are finite, non-negative, and sorted ascending once
//!   validated; estimation sorts defensively.
//! - All entry points are pure functions of their explicit inputs; randomness
//!   is injected by the caller, and no module-level mutable state exists, so
//!   independent fits and simulations may run concurrently without locking.
//!
//! Downstream usage
//! ----------------
//! - Plotting and console reporting live outside this crate; they consume the
//!   fitted [`hawkes::params::HawkesParams`], the branching ratio, and the
//!   intensity grid from [`diagnostics`].
//! - The optimizer layer (`optimization`) is model-agnostic: any type
//!   implementing [`optimization::loglik_optimizer::LogLikelihood`] can be
//!   maximized with it.
//!
//! Example
//! -------
//! ```rust
//! use hawkes_process::hawkes::{model::HawkesModel, params::HawkesParams};
//! use hawkes_process::simulation::thinning::simulate;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let truth = HawkesParams::new(0.5, 0.8, 1.2).unwrap();
//! let mut rng = StdRng::seed_from_u64(7);
//! let timestamps = simulate(&truth, 60.0, &mut rng).unwrap();
//!
//! let mut model = HawkesModel::default();
//! let fitted = model.fit(timestamps).unwrap();
//! assert!(model.branching_ratio().unwrap() >= 0.0);
//! assert!(fitted.mu > 0.0);
//! ```

pub mod diagnostics;
pub mod hawkes;
pub mod optimization;
pub mod simulation;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use hawkes_process::prelude::*;
//
// to import the main crate surface in a single line.

pub mod prelude {
    pub use crate::diagnostics::CriticalityTier;
    pub use crate::hawkes::prelude::*;
    pub use crate::optimization::prelude::*;
    pub use crate::simulation::thinning::simulate;
}
