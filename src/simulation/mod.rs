//! simulation — event-path generation from known Hawkes parameters.
//!
//! Purpose
//! -------
//! House the sampling side of the crate: Ogata's thinning algorithm in
//! [`thinning`], producing validated-ordering event paths that feed the
//! estimation and diagnostics layers (or external data-generation wrappers).
//!
//! Conventions
//! -----------
//! - Random sources are injected per call; the module holds no RNG state of
//!   its own and no global seed.
//! - Simulation shares the intensity math of [`crate::hawkes::intensity`]
//!   rather than duplicating kernel formulas.

pub mod thinning;
