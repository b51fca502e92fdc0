//! Portfolio snapshot.

use serde::Serialize;

use crate::error::{ScoringError, ensure_len};

/// A portfolio snapshot: weights, covariance, per-asset costs and exposures.
///
/// All four inputs share the same asset order. Construction fails with
/// [`ScoringError::DimensionMismatch`] unless every sequence has length N and
/// the covariance matrix is N×N.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Portfolio {
    weights: Vec<f64>,
    cov_matrix: Vec<Vec<f64>>,
    transaction_costs: Vec<f64>,
    exposures: Vec<f64>,
}

impl Portfolio {
    /// Create a portfolio, validating that all dimensions agree.
    pub fn new(
        weights: Vec<f64>,
        cov_matrix: Vec<Vec<f64>>,
        transaction_costs: Vec<f64>,
        exposures: Vec<f64>,
    ) -> Result<Self, ScoringError> {
        let n = weights.len();

        ensure_len("portfolio.cov_matrix rows", n, cov_matrix.len())?;
        for row in &cov_matrix {
            ensure_len("portfolio.cov_matrix columns", n, row.len())?;
        }
        ensure_len("portfolio.transaction_costs", n, transaction_costs.len())?;
        ensure_len("portfolio.exposures", n, exposures.len())?;

        Ok(Self {
            weights,
            cov_matrix,
            transaction_costs,
            exposures,
        })
    }

    /// Number of assets.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.weights.len()
    }

    /// Asset weights.
    #[must_use]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Covariance matrix (row-major, N×N).
    #[must_use]
    pub fn cov_matrix(&self) -> &[Vec<f64>] {
        &self.cov_matrix
    }

    /// Per-asset transaction cost rates.
    #[must_use]
    pub fn transaction_costs(&self) -> &[f64] {
        &self.transaction_costs
    }

    /// Per-asset net exposures.
    #[must_use]
    pub fn exposures(&self) -> &[f64] {
        &self.exposures
    }
}
