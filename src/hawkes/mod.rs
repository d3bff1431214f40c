//! hawkes — univariate self-exciting point process core.
//!
//! Purpose
//! -------
//! Hold the parametric model and the estimation path for the univariate
//! exponential-kernel Hawkes process: validated parameters and event data,
//! the conditional intensity and compensator, the recursive log-likelihood,
//! and the model type that orchestrates the MLE fit.
//!
//! Key behaviors
//! -------------
//! - [`params::HawkesParams`] validates `(μ, α, β)` at the boundary and
//!   derives the branching ratio `α/β`.
//! - [`data::EventSeries`] validates and defensively sorts raw timestamps.
//! - [`intensity`] provides λ(t), the compensator Λ(0, T), and the O(1)
//!   recursive excitation term used by the fit and simulation paths.
//! - [`loglik::neg_log_likelihood`] evaluates `−ℓ` in O(n) with a finite
//!   sentinel penalty for infeasible parameters.
//! - [`model::HawkesModel`] seeds, runs, and records the L-BFGS fit, and
//!   answers branching-ratio queries after fitting.
//!
//! Conventions
//! -----------
//! - Timestamps are float seconds in `[0, T)`, sorted ascending after
//!   validation.
//! - All fallible entry points return [`errors::HawkesResult`]; nothing in
//!   this module panics on user input or writes to global state.

pub mod data;
pub mod errors;
pub mod intensity;
pub mod loglik;
pub mod model;
pub mod params;

pub mod prelude {
    pub use super::data::EventSeries;
    pub use super::errors::{HawkesError, HawkesResult};
    pub use super::intensity::{compensator, intensity_at};
    pub use super::loglik::neg_log_likelihood;
    pub use super::model::HawkesModel;
    pub use super::params::HawkesParams;
}
