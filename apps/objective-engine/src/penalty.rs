//! Linear penalty terms of the objective.
//!
//! Both penalties use absolute values, so they are invariant to the sign of
//! any single position and additive across assets.

use crate::error::{ScoringError, ensure_len};

/// Transaction cost penalty: `Σ |weights[i]| * costs[i]`.
pub fn transaction_penalty(weights: &[f64], costs: &[f64]) -> Result<f64, ScoringError> {
    ensure_len("transaction_penalty", weights.len(), costs.len())?;
    Ok(weights.iter().zip(costs).map(|(w, c)| w.abs() * c).sum())
}

/// Exposure penalty: `Σ |exposures[i]|`.
#[must_use]
pub fn exposure_penalty(exposures: &[f64]) -> f64 {
    exposures.iter().map(|e| e.abs()).sum()
}
