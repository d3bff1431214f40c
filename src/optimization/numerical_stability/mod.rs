//! numerical_stability — guarded nonlinear transforms.
//!
//! Purpose
//! -------
//! Shared numeric primitives for mapping unconstrained optimizer parameters
//! into model space without overflow or catastrophic cancellation. The
//! Hawkes fit path uses [`transformations::safe_softplus`] to keep
//! `(μ, α, β)` strictly positive during the L-BFGS search and
//! [`transformations::safe_softplus_inv`] to seed it from model-space
//! guesses.

pub mod transformations;

pub mod prelude {
    pub use super::transformations::{safe_softplus, safe_softplus_inv};
}
