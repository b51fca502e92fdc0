//! Market data observations fed to the consistency gate.

use serde::{Deserialize, Serialize};

/// A single price quote for an instrument as reported by one source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketObservation {
    /// Reporting source (venue, vendor, feed).
    pub source: String,
    /// Instrument identifier (e.g., "EURUSD").
    pub instrument: String,
    /// Quoted price. Expected positive for FX quotes, not enforced.
    pub price: f64,
}

impl MarketObservation {
    /// Create a new observation.
    #[must_use]
    pub fn new(source: impl Into<String>, instrument: impl Into<String>, price: f64) -> Self {
        Self {
            source: source.into(),
            instrument: instrument.into(),
            price,
        }
    }
}
