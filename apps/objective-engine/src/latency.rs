//! Latency instrumentation for the risk computation.
//!
//! Timing is an explicit call: [`measure`] takes a computation, runs it once
//! on the calling thread and hands back the result together with the elapsed
//! wall-clock duration. There is no ambient timer.
//!
//! The penalty rule is fixed policy: durations above
//! [`LATENCY_THRESHOLD_SECONDS`] cost [`LATENCY_PENALTY_SCALE`] per second,
//! anything at or below the threshold costs nothing. [`LatencyPolicy`]
//! exposes both knobs to configuration with these values as defaults.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Duration above which the latency penalty applies (10 ms).
pub const LATENCY_THRESHOLD_SECONDS: f64 = 0.01;

/// Penalty per second of elapsed time once over the threshold.
pub const LATENCY_PENALTY_SCALE: f64 = 1000.0;

/// Result of a timed computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measured<T> {
    /// Value returned by the computation.
    pub value: T,
    /// Wall-clock time spent in the computation.
    pub elapsed: Duration,
}

impl<T> Measured<T> {
    /// Elapsed time in seconds.
    #[must_use]
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Split into the value and elapsed seconds.
    pub fn into_parts(self) -> (T, f64) {
        let seconds = self.elapsed_seconds();
        (self.value, seconds)
    }
}

/// Run `computation` exactly once, synchronously, and time it.
pub fn measure<T, F>(computation: F) -> Measured<T>
where
    F: FnOnce() -> T,
{
    let started = Instant::now();
    let value = computation();
    let elapsed = started.elapsed();

    Measured { value, elapsed }
}

/// Latency penalty under the default policy.
///
/// Returns `elapsed_seconds * 1000.0` when `elapsed_seconds > 0.01`, else `0.0`.
#[must_use]
pub fn latency_penalty(elapsed_seconds: f64) -> f64 {
    LatencyPolicy::default().penalty(elapsed_seconds)
}

/// Threshold rule mapping elapsed time to a penalty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatencyPolicy {
    /// Strict lower bound on elapsed seconds before any penalty applies.
    #[serde(default = "default_threshold_seconds")]
    pub threshold_seconds: f64,
    /// Penalty per elapsed second once over the threshold.
    #[serde(default = "default_scale")]
    pub scale: f64,
}

impl Default for LatencyPolicy {
    fn default() -> Self {
        Self {
            threshold_seconds: default_threshold_seconds(),
            scale: default_scale(),
        }
    }
}

impl LatencyPolicy {
    /// Create a policy with explicit knobs.
    #[must_use]
    pub const fn new(threshold_seconds: f64, scale: f64) -> Self {
        Self {
            threshold_seconds,
            scale,
        }
    }

    /// Penalty for the given elapsed time.
    #[must_use]
    pub fn penalty(&self, elapsed_seconds: f64) -> f64 {
        if elapsed_seconds > self.threshold_seconds {
            elapsed_seconds * self.scale
        } else {
            0.0
        }
    }
}

const fn default_threshold_seconds() -> f64 {
    LATENCY_THRESHOLD_SECONDS
}

const fn default_scale() -> f64 {
    LATENCY_PENALTY_SCALE
}
