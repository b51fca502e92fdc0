//! Scenario inputs: portfolio, consistency gate and scoring coefficients.

use serde::{Deserialize, Serialize};

use crate::error::ScoringError;
use crate::models::Portfolio;

/// Portfolio as written in the config file. Converted to a validated
/// [`Portfolio`] with `TryFrom`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioConfig {
    /// Asset weights.
    pub weights: Vec<f64>,
    /// Covariance matrix, rows in asset order.
    pub cov_matrix: Vec<Vec<f64>>,
    /// Per-asset transaction cost rates.
    pub transaction_costs: Vec<f64>,
    /// Per-asset net exposures.
    pub exposures: Vec<f64>,
}

impl TryFrom<PortfolioConfig> for Portfolio {
    type Error = ScoringError;

    fn try_from(config: PortfolioConfig) -> Result<Self, Self::Error> {
        Self::new(
            config.weights,
            config.cov_matrix,
            config.transaction_costs,
            config.exposures,
        )
    }
}

/// Consistency gate configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GateConfig {
    /// Maximum allowed absolute deviation of any price from the mean.
    pub tolerance: f64,
}
