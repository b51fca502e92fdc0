//! Portfolio variance and parametric Value-at-Risk.

use crate::error::ScoringError;

use super::linalg::{dot, mat_vec_mul};

/// Quadratic form `wᵀΣw`.
///
/// Non-negative for a positive-semidefinite `cov`. The sign is not checked
/// here; [`value_at_risk`] rejects negative results.
pub fn quadratic_form(weights: &[f64], cov: &[Vec<f64>]) -> Result<f64, ScoringError> {
    let sigma_w = mat_vec_mul(cov, weights)?;
    dot(weights, &sigma_w)
}

/// Portfolio variance. Same contract as [`quadratic_form`].
#[inline]
pub fn portfolio_variance(weights: &[f64], cov: &[Vec<f64>]) -> Result<f64, ScoringError> {
    quadratic_form(weights, cov)
}

/// Parametric Value-at-Risk: `z * sqrt(wᵀΣw)`.
///
/// Fails with [`ScoringError::ArithmeticDomain`] when the variance is
/// negative or NaN (non-PSD covariance).
pub fn value_at_risk(weights: &[f64], cov: &[Vec<f64>], z: f64) -> Result<f64, ScoringError> {
    let variance = portfolio_variance(weights, cov)?;

    if variance.is_nan() || variance < 0.0 {
        tracing::warn!(variance, "Negative portfolio variance, covariance is not PSD");
        return Err(ScoringError::ArithmeticDomain {
            context: "value_at_risk",
            value: variance,
        });
    }

    Ok(z * variance.sqrt())
}
