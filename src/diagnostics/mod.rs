//! diagnostics — intensity grids and criticality classification.
//!
//! Purpose
//! -------
//! Provide the read-only surfaces consumed by external plotting and
//! reporting collaborators: a λ(t) grid evaluator for visualizing fitted
//! intensity, and the branching-ratio criticality tiers. Neither function
//! mutates model state or performs I/O; rendering and console formatting are
//! explicitly out of scope for this crate.
//!
//! Conventions
//! -----------
//! - The grid evaluator uses the naive O(n)-per-point intensity form; grids
//!   are short and the clarity is worth more than the recursion here.
//! - Tier thresholds are policy constants owned by this layer:
//!   `n >= 1.0` is Critical (inclusive), `n <= 0.7` is Stable (inclusive),
//!   and the open band in between is Elevated.
use crate::hawkes::{
    data::EventSeries,
    errors::{HawkesError, HawkesResult},
    intensity::intensity_at,
    params::HawkesParams,
};
use ndarray::Array1;

/// Branching ratios at or above this value classify as [`CriticalityTier::Critical`].
pub const CRITICAL_THRESHOLD: f64 = 1.0;

/// Branching ratios at or below this value classify as [`CriticalityTier::Stable`].
pub const ELEVATED_THRESHOLD: f64 = 0.7;

/// Stability classification of a fitted branching ratio.
///
/// A branching ratio `n = α/β` is the expected number of child events per
/// parent; `n ≥ 1` means the process is endogenously unstable
/// (supercritical), while small `n` means arrivals are driven mostly by the
/// exogenous baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriticalityTier {
    /// `n <= 0.7`: mostly exogenous arrivals, little feedback.
    Stable,
    /// `0.7 < n < 1.0`: strong reflexivity, volatility clustering expected.
    Elevated,
    /// `n >= 1.0`: supercritical, self-fueled cascades possible.
    Critical,
}

impl CriticalityTier {
    /// Classify a branching ratio into its tier.
    ///
    /// Boundary behavior: `1.0` is Critical (inclusive), `0.7` is Stable
    /// (inclusive); Elevated is the open interval between them.
    pub fn from_branching_ratio(ratio: f64) -> Self {
        if ratio >= CRITICAL_THRESHOLD {
            CriticalityTier::Critical
        } else if ratio > ELEVATED_THRESHOLD {
            CriticalityTier::Elevated
        } else {
            CriticalityTier::Stable
        }
    }
}

/// Evaluate λ(t) on an evenly spaced grid over `[t_start, t_end]`.
///
/// Returns `(grid, lambda)` with `points` entries each; `lambda[k]` is the
/// conditional intensity at `grid[k]` given the events strictly before it.
/// Intended as the feed for external intensity plots.
///
/// # Errors
/// - [`HawkesError::InvalidGrid`] if the bounds are non-finite, not
///   ascending, or fewer than 2 points are requested.
pub fn intensity_grid(
    params: &HawkesParams, events: &EventSeries, t_start: f64, t_end: f64, points: usize,
) -> HawkesResult<(Array1<f64>, Array1<f64>)> {
    if !t_start.is_finite() || !t_end.is_finite() || t_start >= t_end || points < 2 {
        return Err(HawkesError::InvalidGrid { start: t_start, end: t_end, points });
    }

    let step = (t_end - t_start) / (points - 1) as f64;
    let grid = Array1::from_iter((0..points).map(|k| t_start + step * k as f64));
    let lambda = grid.mapv(|t| intensity_at(params, events.view(), t));
    Ok((grid, lambda))
}
