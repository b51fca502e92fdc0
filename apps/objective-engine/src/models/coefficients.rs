//! Objective weighting coefficients.

use serde::{Deserialize, Serialize};

use crate::error::ScoringError;

/// Coefficients of the composite objective
/// `VaR(z) + lambda1 * cost + lambda2 * exposure + lambda3 * latency`.
///
/// Supplied per call. The core assumes no defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    /// Confidence multiplier applied to portfolio volatility (e.g., 1.65 for ~95%).
    pub z: f64,
    /// Transaction cost penalty weight.
    pub lambda1: f64,
    /// Exposure penalty weight.
    pub lambda2: f64,
    /// Latency penalty weight.
    pub lambda3: f64,
}

impl Coefficients {
    /// Create a new coefficient set.
    #[must_use]
    pub const fn new(z: f64, lambda1: f64, lambda2: f64, lambda3: f64) -> Self {
        Self {
            z,
            lambda1,
            lambda2,
            lambda3,
        }
    }

    /// Check that `z` is finite and every lambda is finite and non-negative.
    pub fn validate(&self) -> Result<(), ScoringError> {
        if !self.z.is_finite() {
            return Err(ScoringError::InvalidCoefficient {
                name: "z",
                value: self.z,
            });
        }

        for (name, value) in [
            ("lambda1", self.lambda1),
            ("lambda2", self.lambda2),
            ("lambda3", self.lambda3),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ScoringError::InvalidCoefficient { name, value });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_zero_weights() {
        assert!(Coefficients::new(1.65, 0.0, 0.0, 0.0).validate().is_ok());
    }

    #[test]
    fn validate_rejects_negative_lambda() {
        let err = Coefficients::new(1.65, 10.0, -5.0, 0.5)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            ScoringError::InvalidCoefficient {
                name: "lambda2",
                value: -5.0
            }
        );
    }

    #[test]
    fn validate_rejects_non_finite_z() {
        let err = Coefficients::new(f64::NAN, 1.0, 1.0, 1.0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ScoringError::InvalidCoefficient { name: "z", .. }));
    }
}
