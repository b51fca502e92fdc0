//! Observability module for scoring metrics.
//!
//! Metrics go through the `metrics` facade. The library never installs a
//! recorder; without one every call here is a no-op.

mod metrics;

pub use self::metrics::{
    outcome, record_consistency_check, record_risk_latency, record_score_error,
    record_score_outcome,
};
