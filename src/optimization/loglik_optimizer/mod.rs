//! loglik_optimizer — Argmin-powered log-likelihood maximization.
//!
//! Purpose
//! -------
//! Provide a high-level optimization layer for **maximizing log-likelihoods**
//! `ℓ(θ)`. Callers implement a single trait, [`LogLikelihood`], and invoke
//! [`maximize`] to run L-BFGS with a configurable line search, tolerances,
//! and finite-difference gradient fallbacks.
//!
//! Key behaviors
//! -------------
//! - [`adapter::ArgMinAdapter`] converts `ℓ(θ)` into an Argmin-compatible
//!   cost `c(θ) = -ℓ(θ)` and finite-differences the cost when no analytic
//!   gradient is implemented.
//! - [`builders`] construct L-BFGS solvers per [`LineSearcher`];
//!   [`run::run_lbfgs`] executes them and normalizes results into
//!   [`OptimOutcome`].
//! - [`validation`] centralizes tolerance/gradient/outcome checks so
//!   downstream code can assume finite, well-shaped values.
//!
//! Conventions
//! -----------
//! - Parameters live in an unconstrained optimizer space as [`Theta`]
//!   (`Array1<f64>`); any mapping from constrained model space happens in
//!   the model layer.
//! - All user-facing values (including [`OptimOutcome::value`]) are in
//!   log-likelihood space; the cost sign flip is internal.
//! - Errors bubble up as `OptResult<T>`; nothing here panics or uses
//!   `unsafe`.

pub mod adapter;
pub mod api;
pub mod builders;
pub mod run;
pub mod traits;
pub mod types;
pub mod validation;

pub use api::maximize;
pub use traits::{LineSearcher, LogLikelihood, MLEOptions, OptimOutcome, Tolerances};
pub use types::{Cost, FnEvalMap, Grad, Theta, DEFAULT_LBFGS_MEM};

pub mod prelude {
    pub use super::api::maximize;
    pub use super::traits::{LineSearcher, LogLikelihood, MLEOptions, OptimOutcome, Tolerances};
    pub use super::types::{Cost, FnEvalMap, Grad, Theta};
}
