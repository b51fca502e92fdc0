//! Configuration module for the objective engine.
//!
//! Loads a scoring scenario (portfolio, market observations, gate tolerance,
//! coefficients) plus latency policy and logging settings from YAML, with
//! environment variable interpolation.
//!
//! # Usage
//!
//! ```rust,ignore
//! use objective_engine::config::load_config;
//!
//! // Load from default path (scenario.yaml)
//! let config = load_config(None)?;
//!
//! // Load from custom path
//! let config = load_config(Some("scenarios/eurusd.yaml"))?;
//!
//! let portfolio = config.portfolio()?;
//! println!("tolerance: {}", config.gate.tolerance);
//! ```

mod observability;
mod scenario;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ScoringError;
use crate::latency::LatencyPolicy;
use crate::models::{Coefficients, MarketObservation, Portfolio};

pub use observability::{LogFormat, LoggingConfig, ObservabilityConfig};
pub use scenario::{GateConfig, PortfolioConfig};

/// Default scenario file path.
pub const DEFAULT_CONFIG_PATH: &str = "scenario.yaml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),

    /// Portfolio dimensions or values are inconsistent.
    #[error("Invalid portfolio: {0}")]
    InvalidPortfolio(#[from] ScoringError),
}

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Portfolio snapshot to score.
    pub portfolio: PortfolioConfig,
    /// Market observations for the consistency gate.
    pub observations: Vec<MarketObservation>,
    /// Consistency gate configuration.
    pub gate: GateConfig,
    /// Objective coefficients.
    pub coefficients: Coefficients,
    /// Latency penalty policy.
    #[serde(default)]
    pub latency: LatencyPolicy,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Build the validated portfolio.
    pub fn portfolio(&self) -> Result<Portfolio, ConfigError> {
        Ok(Portfolio::try_from(self.portfolio.clone())?)
    }
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "scenario.yaml".
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

    // Read the config file
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map(|m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.map_or_else(String::new, str::to_string),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // Dimension agreement
    config.portfolio()?;

    if config.observations.is_empty() {
        return Err(ConfigError::ValidationError(
            "observations must not be empty".to_string(),
        ));
    }

    let tolerance = config.gate.tolerance;
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(ConfigError::ValidationError(format!(
            "gate.tolerance must be finite and non-negative, got {tolerance}"
        )));
    }

    config
        .coefficients
        .validate()
        .map_err(|e| ConfigError::ValidationError(format!("coefficients: {e}")))?;

    let LatencyPolicy {
        threshold_seconds,
        scale,
    } = config.latency;
    if !threshold_seconds.is_finite() || threshold_seconds < 0.0 {
        return Err(ConfigError::ValidationError(format!(
            "latency.threshold_seconds must be finite and non-negative, got {threshold_seconds}"
        )));
    }

    if !scale.is_finite() || scale < 0.0 {
        return Err(ConfigError::ValidationError(format!(
            "latency.scale must be finite and non-negative, got {scale}"
        )));
    }

    Ok(())
}
