// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Objective Engine - Rust Core Library
//!
//! Risk-adjusted objective scoring for a single portfolio snapshot in the
//! Cream trading system.
//!
//! # Pipeline
//!
//! Data flows one way and nothing is retained between calls:
//!
//! - **Consistency gate** (`consistency`): market observations from several
//!   sources must agree within a tolerance, otherwise scoring abstains
//! - **Risk** (`risk`): portfolio variance `wᵀΣw` and parametric VaR
//! - **Penalties** (`penalty`, `latency`): transaction cost, exposure, and
//!   the wall-clock cost of the risk computation
//! - **Engine** (`engine`): weighted sum of the above
//!
//! # Example
//!
//! ```rust
//! use objective_engine::{Coefficients, MarketObservation, ObjectiveEngine, Portfolio};
//!
//! let portfolio = Portfolio::new(
//!     vec![0.6, 0.4],
//!     vec![vec![0.04, 0.01], vec![0.01, 0.03]],
//!     vec![0.001, 0.002],
//!     vec![0.1, -0.05],
//! )?;
//! let observations = vec![
//!     MarketObservation::new("ecb", "EURUSD", 1.1025),
//!     MarketObservation::new("oanda", "EURUSD", 1.1026),
//! ];
//!
//! let outcome = ObjectiveEngine::default().score(
//!     &portfolio,
//!     &observations,
//!     0.0003,
//!     &Coefficients::new(1.65, 10.0, 5.0, 0.5),
//! )?;
//!
//! match outcome.score() {
//!     Some(result) => println!("objective = {:.4}", result.value),
//!     None => println!("market data inconsistent, no score"),
//! }
//! # Ok::<(), objective_engine::ScoringError>(())
//! ```
//!
//! # Coverage
//!
//! Coverage threshold: 90% (Critical tier)

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Scenario configuration loading and validation.
pub mod config;

/// Cross-source market data consistency gate.
pub mod consistency;

/// Scoring orchestration.
pub mod engine;

/// Error types and codes.
pub mod error;

/// Latency measurement and penalty policy.
pub mod latency;

/// Portfolio, observation and coefficient value types.
pub mod models;

/// Scoring metrics.
pub mod observability;

/// Transaction cost and exposure penalties.
pub mod penalty;

/// Linear algebra kernel, portfolio variance and VaR.
pub mod risk;

/// Tracing subscriber setup.
pub mod telemetry;

// =============================================================================
// Re-exports
// =============================================================================

pub use consistency::{ConsistencyReport, check_consistency, evaluate_consistency};
pub use engine::{GateFailure, ObjectiveEngine, ScoreBreakdown, ScoreOutcome, ScoreResult, score};
pub use error::{ErrorCode, ScoringError};
pub use latency::{
    LATENCY_PENALTY_SCALE, LATENCY_THRESHOLD_SECONDS, LatencyPolicy, Measured, latency_penalty,
    measure,
};
pub use models::{Coefficients, MarketObservation, Portfolio};
pub use penalty::{exposure_penalty, transaction_penalty};
pub use risk::{dot, mat_vec_mul, portfolio_variance, quadratic_form, value_at_risk};
