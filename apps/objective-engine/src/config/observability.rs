//! Logging settings read from the `observability.logging` block of a
//! scenario file.
//!
//! The binary installs its subscriber from these values once the scenario is
//! loaded. Library callers that install their own subscriber can ignore them.

use serde::{Deserialize, Serialize};

/// Observability block of a scenario file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ObservabilityConfig {
    /// Console logging of the scoring run.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Output encoding of log lines written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per event, for log shippers.
    #[default]
    Json,
    /// Multi-line human-readable output.
    Pretty,
}

impl LogFormat {
    /// Name as written in the scenario file.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Pretty => "pretty",
        }
    }
}

/// Console logging of a scoring run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset, e.g. `info` or
    /// `objective_engine=debug`. `debug` shows the per-run gate and
    /// latency details.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Encoding of stderr output. stdout carries only the score report.
    #[serde(default)]
    pub format: LogFormat,
    /// Emit a close event for the `objective.score` span, carrying how long
    /// the whole scoring call took.
    #[serde(default = "default_include_spans")]
    pub include_spans: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            include_spans: default_include_spans(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

const fn default_include_spans() -> bool {
    true
}
