//! Numerical stability utilities.
//!
//! Safe implementations of nonlinear transforms that are prone to
//! overflow/underflow in naive form, using explicit cutoffs (`x > 20.0`) to
//! keep `f64` arithmetic in a well-conditioned regime. In this crate they
//! back the positivity map between optimizer θ-space and Hawkes parameter
//! space (`μ, α, β > 0`).

/// Numerically stable softplus: `softplus(x) = ln(1 + exp(x))`.
///
/// Maps ℝ → (0, ∞) without overflow for large positive `x`:
/// - for `x > 20.0`, `softplus(x) ≈ x + ln1p(exp(-x)) ≈ x`;
/// - otherwise `ln1p(exp(x))`.
pub fn safe_softplus(x: f64) -> f64 {
    if x > 20.0 { x } else { x.exp().ln_1p() }
}

/// Stable inverse of softplus on `(0, ∞)`: solves `softplus(t) = x`,
/// returning `t = ln(exp(x) - 1)`.
///
/// Mirrors the guarded strategy of [`safe_softplus`]:
/// - for `x > 20.0`, `ln(exp(x) - 1) ≈ x`;
/// - otherwise `ln(expm1(x))`.
///
/// The input must be finite and `> 0`.
pub fn safe_softplus_inv(x: f64) -> f64 {
    if x > 20.0 { x } else { x.exp_m1().ln() }
}
