//! Cross-source market data consistency gate.
//!
//! Scoring only proceeds when every reported price sits within `tolerance` of
//! the mean of all reported prices. The bound is inclusive.

use serde::Serialize;

use crate::error::ScoringError;
use crate::models::MarketObservation;

/// Detailed outcome of a consistency check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsistencyReport {
    /// Arithmetic mean of all observed prices.
    pub mean: f64,
    /// Largest absolute deviation from the mean.
    pub max_deviation: f64,
    /// Tolerance the deviations were tested against.
    pub tolerance: f64,
    /// Whether every deviation is within tolerance.
    pub passed: bool,
    /// Sources whose price deviates by more than the tolerance.
    pub outliers: Vec<String>,
}

/// Check that all observations agree within `tolerance` of their mean.
///
/// Empty input is a [`ScoringError::DimensionMismatch`], never a vacuous pass.
pub fn check_consistency(
    observations: &[MarketObservation],
    tolerance: f64,
) -> Result<bool, ScoringError> {
    Ok(evaluate_consistency(observations, tolerance)?.passed)
}

/// Run the consistency check and report mean, worst deviation and outliers.
pub fn evaluate_consistency(
    observations: &[MarketObservation],
    tolerance: f64,
) -> Result<ConsistencyReport, ScoringError> {
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(ScoringError::InvalidTolerance(tolerance));
    }
    if observations.is_empty() {
        return Err(ScoringError::dimension_mismatch(
            "check_consistency observations",
            1,
            0,
        ));
    }

    let mean = observations.iter().map(|o| o.price).sum::<f64>() / observations.len() as f64;

    let mut max_deviation = 0.0_f64;
    let mut outliers = Vec::new();
    for obs in observations {
        let deviation = (obs.price - mean).abs();
        // NaN sticks: `f64::max` would drop it.
        if deviation.is_nan() || deviation > max_deviation {
            max_deviation = deviation;
        }
        if deviation.is_nan() || deviation > tolerance {
            outliers.push(obs.source.clone());
        }
    }

    Ok(ConsistencyReport {
        mean,
        max_deviation,
        tolerance,
        passed: outliers.is_empty(),
        outliers,
    })
}
