//! Error handling for the objective engine.
//!
//! Computation errors abort a scoring call immediately; no partial objective
//! value is ever returned alongside them. A failed consistency gate is *not*
//! an error: it is reported as [`crate::engine::ScoreOutcome::GateFailure`].
//!
//! # Error Codes
//!
//! | Code | Usage |
//! |------|-------|
//! | `DIMENSION_MISMATCH` | Vector/matrix lengths disagree, or no observations |
//! | `ARITHMETIC_DOMAIN` | Portfolio variance is negative (VaR undefined) |
//! | `INVALID_INPUT` | Negative tolerance or penalty weight, non-finite input |

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Domain for objective engine errors.
pub const ERROR_DOMAIN: &str = "cream.objective";

/// Error codes for the objective engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Sequence or matrix dimensions disagree.
    DimensionMismatch,
    /// Result outside the real domain (square root of a negative variance).
    ArithmeticDomain,
    /// Scalar input outside its accepted range.
    InvalidInput,
}

impl ErrorCode {
    /// Get the error reason string.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::DimensionMismatch => "DIMENSION_MISMATCH",
            Self::ArithmeticDomain => "ARITHMETIC_DOMAIN",
            Self::InvalidInput => "INVALID_INPUT",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason())
    }
}

/// Errors raised while computing an objective score.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    /// Two inputs that must share a length do not.
    #[error("dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Operation or field where the mismatch was detected.
        context: &'static str,
        /// Expected length.
        expected: usize,
        /// Actual length.
        actual: usize,
    },

    /// A value fell outside the real domain of the next operation.
    #[error("arithmetic domain error in {context}: {value}")]
    ArithmeticDomain {
        /// Operation that rejected the value.
        context: &'static str,
        /// Offending value.
        value: f64,
    },

    /// Consistency tolerance is negative or not finite.
    #[error("invalid tolerance: {0} (must be finite and >= 0)")]
    InvalidTolerance(f64),

    /// Objective coefficient outside its accepted range.
    #[error("invalid coefficient {name}: {value}")]
    InvalidCoefficient {
        /// Coefficient name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
}

impl ScoringError {
    /// Dimension mismatch between an expected and actual length.
    #[must_use]
    pub const fn dimension_mismatch(context: &'static str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            context,
            expected,
            actual,
        }
    }

    /// Get the error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::DimensionMismatch { .. } => ErrorCode::DimensionMismatch,
            Self::ArithmeticDomain { .. } => ErrorCode::ArithmeticDomain,
            Self::InvalidTolerance(_) | Self::InvalidCoefficient { .. } => ErrorCode::InvalidInput,
        }
    }
}

/// Ensure two lengths agree.
pub(crate) const fn ensure_len(
    context: &'static str,
    expected: usize,
    actual: usize,
) -> Result<(), ScoringError> {
    if expected == actual {
        Ok(())
    } else {
        Err(ScoringError::dimension_mismatch(context, expected, actual))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_mapping() {
        assert_eq!(
            ScoringError::dimension_mismatch("dot", 3, 2).code(),
            ErrorCode::DimensionMismatch
        );
        assert_eq!(
            ScoringError::ArithmeticDomain {
                context: "value_at_risk",
                value: -0.1
            }
            .code(),
            ErrorCode::ArithmeticDomain
        );
        assert_eq!(
            ScoringError::InvalidTolerance(-1.0).code(),
            ErrorCode::InvalidInput
        );
    }

    #[test]
    fn test_error_display() {
        let error = ScoringError::dimension_mismatch("transaction_penalty", 3, 2);
        assert_eq!(
            error.to_string(),
            "dimension mismatch in transaction_penalty: expected 3, got 2"
        );
        assert_eq!(ErrorCode::ArithmeticDomain.to_string(), "ARITHMETIC_DOMAIN");
    }

    #[test]
    fn test_ensure_len() {
        assert!(ensure_len("dot", 4, 4).is_ok());
        assert_eq!(
            ensure_len("dot", 4, 1),
            Err(ScoringError::dimension_mismatch("dot", 4, 1))
        );
    }
}
