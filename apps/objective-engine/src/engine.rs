//! Objective Engine
//!
//! Orchestrates a single scoring call:
//!
//! 1. **Gate**: market observations must agree within tolerance. On failure
//!    the call stops with [`ScoreOutcome::GateFailure`]; no risk work runs.
//! 2. **Risk**: VaR is computed under [`measure`] so its wall-clock cost
//!    feeds the latency penalty.
//! 3. **Penalties**: transaction cost, exposure and latency terms.
//! 4. **Objective**: `var + λ1·cost + λ2·exposure + λ3·latency`.
//!
//! Any [`ScoringError`] aborts the call with no partial value.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::consistency::{ConsistencyReport, evaluate_consistency};
use crate::error::ScoringError;
use crate::latency::{LatencyPolicy, measure};
use crate::models::{Coefficients, MarketObservation, Portfolio};
use crate::observability::{
    outcome, record_consistency_check, record_risk_latency, record_score_error,
    record_score_outcome,
};
use crate::penalty::{exposure_penalty, transaction_penalty};
use crate::risk::value_at_risk;

/// Unweighted components of the objective.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// Value-at-Risk term.
    pub var_term: f64,
    /// Transaction cost penalty before weighting.
    pub cost_term: f64,
    /// Exposure penalty before weighting.
    pub exposure_term: f64,
    /// Latency penalty before weighting.
    pub latency_term: f64,
}

impl ScoreBreakdown {
    /// Weighted sum of the components.
    #[must_use]
    pub fn objective(&self, coefficients: &Coefficients) -> f64 {
        self.var_term
            + coefficients.lambda1 * self.cost_term
            + coefficients.lambda2 * self.exposure_term
            + coefficients.lambda3 * self.latency_term
    }
}

/// A successful score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    /// Objective value.
    pub value: f64,
    /// Wall-clock seconds spent computing VaR.
    pub elapsed_seconds: f64,
    /// Components that make up `value`.
    pub breakdown: ScoreBreakdown,
    /// When the score was produced.
    pub scored_at: DateTime<Utc>,
}

/// Market data failed the consistency gate; the score must not be trusted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GateFailure {
    /// Gate diagnostics (mean, worst deviation, outlying sources).
    pub report: ConsistencyReport,
}

/// Terminal state of a scoring call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ScoreOutcome {
    /// Gate passed, objective computed.
    Scored(ScoreResult),
    /// Gate failed, scoring abstained.
    GateFailure(GateFailure),
}

impl ScoreOutcome {
    /// Whether an objective value was produced.
    #[must_use]
    pub const fn is_scored(&self) -> bool {
        matches!(self, Self::Scored(_))
    }

    /// The score, if the gate passed.
    #[must_use]
    pub const fn score(&self) -> Option<&ScoreResult> {
        match self {
            Self::Scored(result) => Some(result),
            Self::GateFailure(_) => None,
        }
    }

    /// Consume into the score, if the gate passed.
    #[must_use]
    pub fn into_score(self) -> Option<ScoreResult> {
        match self {
            Self::Scored(result) => Some(result),
            Self::GateFailure(_) => None,
        }
    }
}

/// Objective Engine - scores portfolio snapshots.
///
/// Holds only an immutable [`LatencyPolicy`], so one engine can serve
/// independent calls from any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectiveEngine {
    latency_policy: LatencyPolicy,
}

impl ObjectiveEngine {
    /// Create an engine with the given latency policy.
    #[must_use]
    pub const fn new(latency_policy: LatencyPolicy) -> Self {
        Self { latency_policy }
    }

    /// Latency policy in effect.
    #[must_use]
    pub const fn latency_policy(&self) -> &LatencyPolicy {
        &self.latency_policy
    }

    /// Score a portfolio snapshot.
    ///
    /// Returns `Ok(ScoreOutcome::GateFailure)` when the observations disagree
    /// beyond `tolerance`, and `Err` when any computation fails.
    #[tracing::instrument(
        name = "objective.score",
        skip_all,
        fields(assets = portfolio.dimension(), observations = observations.len())
    )]
    pub fn score(
        &self,
        portfolio: &Portfolio,
        observations: &[MarketObservation],
        tolerance: f64,
        coefficients: &Coefficients,
    ) -> Result<ScoreOutcome, ScoringError> {
        let result = self.score_inner(portfolio, observations, tolerance, coefficients);

        match &result {
            Ok(ScoreOutcome::Scored(score)) => {
                record_score_outcome(outcome::SCORED, Some(score.value));
            }
            Ok(ScoreOutcome::GateFailure(_)) => {
                record_score_outcome(outcome::GATE_FAILURE, None);
            }
            Err(e) => {
                tracing::error!(error = %e, code = %e.code(), "Scoring aborted");
                record_score_error(e.code().reason());
            }
        }

        result
    }

    fn score_inner(
        &self,
        portfolio: &Portfolio,
        observations: &[MarketObservation],
        tolerance: f64,
        coefficients: &Coefficients,
    ) -> Result<ScoreOutcome, ScoringError> {
        coefficients.validate()?;

        let report = evaluate_consistency(observations, tolerance)?;
        record_consistency_check(report.max_deviation, report.passed);

        if !report.passed {
            tracing::warn!(
                mean = report.mean,
                max_deviation = report.max_deviation,
                tolerance,
                outliers = ?report.outliers,
                "Market data inconsistent, abstaining from score"
            );
            return Ok(ScoreOutcome::GateFailure(GateFailure { report }));
        }

        tracing::debug!(
            mean = report.mean,
            max_deviation = report.max_deviation,
            "Consistency gate passed"
        );

        let measured =
            measure(|| value_at_risk(portfolio.weights(), portfolio.cov_matrix(), coefficients.z));
        let elapsed_seconds = measured.elapsed_seconds();
        let var_term = measured.value?;

        let cost_term = transaction_penalty(portfolio.weights(), portfolio.transaction_costs())?;
        let exposure_term = exposure_penalty(portfolio.exposures());
        let latency_term = self.latency_policy.penalty(elapsed_seconds);

        record_risk_latency(elapsed_seconds, latency_term > 0.0);
        if latency_term > 0.0 {
            tracing::warn!(
                elapsed_seconds,
                threshold_seconds = self.latency_policy.threshold_seconds,
                latency_term,
                "Risk computation exceeded latency threshold"
            );
        }

        let breakdown = ScoreBreakdown {
            var_term,
            cost_term,
            exposure_term,
            latency_term,
        };
        let value = breakdown.objective(coefficients);

        tracing::info!(
            value,
            var_term,
            cost_term,
            exposure_term,
            latency_term,
            elapsed_seconds,
            "Portfolio scored"
        );

        Ok(ScoreOutcome::Scored(ScoreResult {
            value,
            elapsed_seconds,
            breakdown,
            scored_at: Utc::now(),
        }))
    }
}

/// Score with the default latency policy and flat coefficient arguments.
#[allow(clippy::too_many_arguments)]
pub fn score(
    portfolio: &Portfolio,
    observations: &[MarketObservation],
    tolerance: f64,
    z: f64,
    lambda1: f64,
    lambda2: f64,
    lambda3: f64,
) -> Result<ScoreOutcome, ScoringError> {
    ObjectiveEngine::default().score(
        portfolio,
        observations,
        tolerance,
        &Coefficients::new(z, lambda1, lambda2, lambda3),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_portfolio() -> Portfolio {
        Portfolio::new(
            vec![0.4, 0.3, 0.3],
            vec![
                vec![0.04, 0.01, 0.02],
                vec![0.01, 0.03, 0.015],
                vec![0.02, 0.015, 0.05],
            ],
            vec![0.001, 0.002, 0.0015],
            vec![0.1, -0.05, 0.08],
        )
        .unwrap()
    }

    fn quotes(prices: &[f64]) -> Vec<MarketObservation> {
        prices
            .iter()
            .enumerate()
            .map(|(i, p)| MarketObservation::new(format!("source-{i}"), "EURUSD", *p))
            .collect()
    }

    #[test]
    fn test_breakdown_objective() {
        let breakdown = ScoreBreakdown {
            var_term: 0.25,
            cost_term: 0.001,
            exposure_term: 0.2,
            latency_term: 12.0,
        };
        let coefficients = Coefficients::new(1.65, 10.0, 5.0, 0.5);
        assert!((breakdown.objective(&coefficients) - (0.25 + 0.01 + 1.0 + 6.0)).abs() < 1e-12);
    }

    #[test]
    fn test_score_reference_portfolio() {
        let engine = ObjectiveEngine::default();
        let outcome = engine
            .score(
                &reference_portfolio(),
                &quotes(&[1.1025, 1.1026, 1.1024]),
                0.0003,
                &Coefficients::new(1.65, 10.0, 5.0, 0.5),
            )
            .unwrap();

        let score = outcome.score().unwrap();
        let deterministic = 1.65 * 0.0235_f64.sqrt() + 10.0 * 0.00145 + 5.0 * 0.23;
        assert!(score.value >= deterministic - 1e-9);
        assert!((score.breakdown.var_term - 1.65 * 0.0235_f64.sqrt()).abs() < 1e-12);
        assert!((score.breakdown.cost_term - 0.00145).abs() < 1e-12);
        assert!((score.breakdown.exposure_term - 0.23).abs() < 1e-12);
        assert!(
            (score.value - score.breakdown.objective(&Coefficients::new(1.65, 10.0, 5.0, 0.5)))
                .abs()
                < 1e-12
        );
    }

    #[test]
    fn test_gate_failure_is_not_an_error() {
        let outcome = score(
            &reference_portfolio(),
            &quotes(&[1.205, 1.206, 1.204]),
            0.0001,
            1.65,
            10.0,
            5.0,
            0.5,
        )
        .unwrap();

        assert!(!outcome.is_scored());
        assert!(outcome.score().is_none());
        let ScoreOutcome::GateFailure(failure) = outcome else {
            panic!("expected gate failure");
        };
        assert!(!failure.report.passed);
    }

    #[test]
    fn test_gate_failure_skips_risk_computation() {
        // Non-PSD covariance would fail VaR, so reaching it would be an error
        let portfolio = Portfolio::new(
            vec![1.0, 0.0],
            vec![vec![-1.0, 0.0], vec![0.0, -1.0]],
            vec![0.0, 0.0],
            vec![0.0, 0.0],
        )
        .unwrap();

        let outcome = score(&portfolio, &quotes(&[1.0, 2.0]), 0.1, 1.65, 1.0, 1.0, 1.0).unwrap();
        assert!(matches!(outcome, ScoreOutcome::GateFailure(_)));
    }

    #[test]
    fn test_negative_variance_aborts() {
        let portfolio = Portfolio::new(
            vec![1.0, 0.0],
            vec![vec![-1.0, 0.0], vec![0.0, 1.0]],
            vec![0.0, 0.0],
            vec![0.0, 0.0],
        )
        .unwrap();

        let err = score(&portfolio, &quotes(&[1.0]), 0.0, 1.65, 1.0, 1.0, 1.0).unwrap_err();
        assert!(matches!(err, ScoringError::ArithmeticDomain { .. }));
    }

    #[test]
    fn test_empty_observations_abort() {
        let err = score(&reference_portfolio(), &[], 0.1, 1.65, 1.0, 1.0, 1.0).unwrap_err();
        assert!(matches!(err, ScoringError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_invalid_coefficient_aborts() {
        let err = score(
            &reference_portfolio(),
            &quotes(&[1.0]),
            0.1,
            1.65,
            -1.0,
            1.0,
            1.0,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ScoringError::InvalidCoefficient { name: "lambda1", .. }
        ));
    }

    #[test]
    fn test_strict_latency_policy_penalizes() {
        // Any measurable duration exceeds a negative threshold
        let engine = ObjectiveEngine::new(LatencyPolicy::new(-1.0, 1000.0));
        let outcome = engine
            .score(
                &reference_portfolio(),
                &quotes(&[1.0]),
                0.0,
                &Coefficients::new(1.65, 0.0, 0.0, 1.0),
            )
            .unwrap();

        let score = outcome.into_score().unwrap();
        assert!((score.breakdown.latency_term - score.elapsed_seconds * 1000.0).abs() < 1e-9);
        assert!(score.value >= score.breakdown.var_term);
    }

    #[test]
    fn test_outcome_serializes_with_tag() {
        let outcome = score(
            &reference_portfolio(),
            &quotes(&[1.205, 1.206, 1.204]),
            0.0001,
            1.65,
            10.0,
            5.0,
            0.5,
        )
        .unwrap();

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["outcome"], "gate_failure");
        assert_eq!(json["report"]["passed"], false);
    }

    #[test]
    fn test_engine_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ObjectiveEngine>();
    }
}
