//! Core value types for objective scoring.
//!
//! Everything here is value-semantic: constructed once, read by the engine,
//! never mutated or retained across calls.

mod coefficients;
mod observation;
mod portfolio;

pub use coefficients::Coefficients;
pub use observation::MarketObservation;
pub use portfolio::Portfolio;
