//! Metrics for objective scoring.
//!
//! # Example
//!
//! ```ignore
//! use objective_engine::observability::{outcome, record_score_outcome};
//!
//! record_score_outcome(outcome::SCORED, Some(1.42));
//! ```

use metrics::{counter, gauge, histogram};

/// Outcome labels for `objective_scores_total`.
pub mod outcome {
    /// Gate passed and an objective value was produced.
    pub const SCORED: &str = "scored";
    /// Gate rejected the market data.
    pub const GATE_FAILURE: &str = "gate_failure";
    /// A computation error aborted the call.
    pub const ERROR: &str = "error";
}

// ============================================================================
// Scoring Metrics
// ============================================================================

/// Record the outcome of a scoring call.
///
/// # Arguments
///
/// * `outcome` - One of the [`outcome`] labels
/// * `value` - Objective value when scored
pub fn record_score_outcome(outcome: &'static str, value: Option<f64>) {
    counter!("objective_scores_total", "outcome" => outcome).increment(1);

    if let Some(value) = value {
        gauge!("objective_value").set(value);
    }
}

/// Record a scoring error by error code.
pub fn record_score_error(code: &'static str) {
    counter!("objective_scores_total", "outcome" => outcome::ERROR, "code" => code).increment(1);
}

/// Record wall-clock time of the risk computation and whether it was penalized.
pub fn record_risk_latency(latency_seconds: f64, penalized: bool) {
    histogram!("objective_risk_latency_seconds").record(latency_seconds);

    if penalized {
        counter!("objective_latency_penalties_total").increment(1);
    }
}

/// Record the worst price deviation seen by the consistency gate.
pub fn record_consistency_check(max_deviation: f64, passed: bool) {
    gauge!("objective_gate_max_deviation").set(max_deviation);
    counter!(
        "objective_gate_checks_total",
        "result" => if passed { "pass" } else { "fail" }
    )
    .increment(1);
}

// ============================================================================
// Tests
// ============================================================================
