//! Errors for the univariate Hawkes engine (data validation, parameter
//! checks, simulation guards, and estimation failures).
//!
//! This module defines the model error type, [`HawkesError`], used across the
//! public API. It implements `Display`/`Error` and converts into the
//! optimizer's unified [`OptError`](crate::optimization::errors::OptError)
//! when a model evaluation fails inside a solver run.
//!
//! ## Conventions
//! - **Indices are 0-based** and refer to the caller-supplied (pre-sort)
//!   timestamp order.
//! - Timestamps must be **finite and non-negative**; events live in `[0, T)`.
//! - Optimizer/backend failures are normalized to
//!   [`HawkesError::OptimizationFailed`] with a human-readable status.
//!   Soft non-convergence is *not* an error; it is reported through the
//!   structured [`OptimOutcome`](crate::optimization::loglik_optimizer::OptimOutcome).

/// Crate-wide result alias for Hawkes operations that may produce
/// [`HawkesError`].
pub type HawkesResult<T> = Result<T, HawkesError>;

/// Unified error type for univariate Hawkes modeling.
///
/// Covers input/data validation, parameter-boundary checks, simulation
/// guards, and estimation failures. All invalid inputs are reported through
/// this enum; no public entry point panics.
#[derive(Debug, Clone, PartialEq)]
pub enum HawkesError {
    // ---- Input/data validation ----
    /// Timestamp series is empty.
    EmptySeries,

    /// A timestamp is NaN/±inf.
    NonFiniteTimestamp { index: usize, value: f64 },

    /// A timestamp is negative (events live in `[0, T)`).
    NegativeTimestamp { index: usize, value: f64 },

    // ---- Parameter validation ----
    /// Baseline rate must be finite and > 0.
    InvalidMu { value: f64 },

    /// Excitation weight must be finite and >= 0.
    InvalidAlpha { value: f64 },

    /// Decay rate must be finite and > 0.
    InvalidBeta { value: f64 },

    // ---- Simulation ----
    /// Simulation horizon must be finite and > 0.
    InvalidHorizon { value: f64 },

    /// Thinning loop produced a non-finite upper-bound intensity.
    NonFiniteIntensity { t: f64, value: f64 },

    // ---- Diagnostics ----
    /// Intensity grid bounds must be finite with start < end and >= 2 points.
    InvalidGrid { start: f64, end: f64, points: usize },

    // ---- Estimation ----
    /// Branching-ratio (or parameter) query before a successful `fit`.
    ModelNotFitted,

    /// Optimizer failed outright; includes a human-readable status/reason.
    OptimizationFailed { status: String },
}

impl std::error::Error for HawkesError {}

impl std::fmt::Display for HawkesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HawkesError::EmptySeries => {
                write!(f, "Timestamp series is empty")
            }
            HawkesError::NonFiniteTimestamp { index, value } => {
                write!(f, "Non-finite timestamp at index {index}: {value}")
            }
            HawkesError::NegativeTimestamp { index, value } => {
                write!(f, "Negative timestamp at index {index}: {value}, events live in [0, T)")
            }
            HawkesError::InvalidMu { value } => {
                write!(f, "Invalid baseline rate mu: {value}, must be finite and > 0")
            }
            HawkesError::InvalidAlpha { value } => {
                write!(f, "Invalid excitation weight alpha: {value}, must be finite and >= 0")
            }
            HawkesError::InvalidBeta { value } => {
                write!(f, "Invalid decay rate beta: {value}, must be finite and > 0")
            }
            HawkesError::InvalidHorizon { value } => {
                write!(f, "Invalid simulation horizon: {value}, must be finite and > 0")
            }
            HawkesError::NonFiniteIntensity { t, value } => {
                write!(f, "Non-finite upper-bound intensity {value} at t = {t}")
            }
            HawkesError::InvalidGrid { start, end, points } => {
                write!(
                    f,
                    "Invalid intensity grid [{start}, {end}] with {points} points: \
                     bounds must be finite with start < end and points >= 2"
                )
            }
            HawkesError::ModelNotFitted => {
                write!(f, "Model has not been fitted yet")
            }
            HawkesError::OptimizationFailed { status } => {
                write!(f, "Optimization failed: {status}")
            }
        }
    }
}
