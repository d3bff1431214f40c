//! Validated event-time containers for Hawkes models.
//!
//! Purpose
//! -------
//! Provide a small, validated container for event timestamps used by the
//! likelihood, the fit path, and diagnostics. Validation and the defensive
//! sort live here so downstream code can assume clean, ascending data.
//!
//! Key behaviors
//! -------------
//! - [`EventSeries`] enforces the data invariants (non-empty, finite,
//!   non-negative timestamps) and sorts ascending at construction time.
//! - Duplicated timestamps are permitted and kept in a consistent order; the
//!   likelihood treats a zero gap as `dt = 0`.
//!
//! Invariants & assumptions
//! ------------------------
//! - `times.len() > 0`; every entry is finite and `>= 0`.
//! - `times` is sorted ascending after construction.
//! - Error indices refer to the caller-supplied order, before sorting.
use crate::hawkes::errors::{HawkesError, HawkesResult};
use ndarray::{Array1, ArrayView1};

/// Validated, ascending series of event timestamps (seconds).
///
/// Produced by the simulator or supplied externally for fitting. The
/// constructor sorts defensively, so callers are never required to pre-sort.
#[derive(Debug, Clone, PartialEq)]
pub struct EventSeries {
    /// Event timestamps, sorted ascending; finite and non-negative.
    times: Array1<f64>,
}

impl EventSeries {
    /// Construct a validated [`EventSeries`] from raw timestamps.
    ///
    /// Validation runs over the input order (so error indices match what the
    /// caller passed in), then the series is sorted ascending. Duplicates
    /// are kept.
    ///
    /// # Errors
    /// - [`HawkesError::EmptySeries`] if `times` is empty.
    /// - [`HawkesError::NonFiniteTimestamp`] at the first NaN/±∞ entry.
    /// - [`HawkesError::NegativeTimestamp`] at the first entry `< 0`.
    pub fn new(times: Array1<f64>) -> HawkesResult<Self> {
        if times.is_empty() {
            return Err(HawkesError::EmptySeries);
        }
        for (index, &value) in times.iter().enumerate() {
            if !value.is_finite() {
                return Err(HawkesError::NonFiniteTimestamp { index, value });
            }
            if value < 0.0 {
                return Err(HawkesError::NegativeTimestamp { index, value });
            }
        }
        let mut sorted = times.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));
        Ok(EventSeries { times: Array1::from_vec(sorted) })
    }

    /// Number of events in the series.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether the series is empty. Always `false` for a constructed series;
    /// present for API completeness.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Timestamp of the last (largest) event — the observation horizon `T`
    /// used by the likelihood.
    pub fn last(&self) -> f64 {
        self.times[self.times.len() - 1]
    }

    /// Read-only view of the sorted timestamps.
    pub fn view(&self) -> ArrayView1<'_, f64> {
        self.times.view()
    }
}
