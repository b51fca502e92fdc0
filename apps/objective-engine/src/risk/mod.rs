//! Parametric portfolio risk.
//!
//! Provides the linear algebra kernel and the variance-based Value-at-Risk
//! model used as the risk term of the objective.
//!
//! # Features
//!
//! - Square matrix-vector multiply and dot product over `f64` slices
//! - Portfolio variance as the quadratic form `wᵀΣw`
//! - Parametric VaR `z * sqrt(wᵀΣw)`
//!
//! # Example
//!
//! ```rust
//! use objective_engine::risk::value_at_risk;
//!
//! let weights = [0.5, 0.5];
//! let cov = vec![vec![0.04, 0.0], vec![0.0, 0.04]];
//! let var = value_at_risk(&weights, &cov, 1.65)?;
//! assert!(var > 0.0);
//! # Ok::<(), objective_engine::ScoringError>(())
//! ```

pub mod linalg;
mod var;

pub use linalg::{dot, mat_vec_mul};
pub use var::{portfolio_variance, quadratic_form, value_at_risk};
