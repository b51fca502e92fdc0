//! Objective Engine Binary
//!
//! Scores the portfolio described in a scenario file and prints the outcome
//! as JSON on stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin objective-engine -- scenarios/eurusd.yaml
//! ```
//!
//! # Environment Variables
//!
//! - `OBJECTIVE_CONFIG`: Scenario path when no argument is given (default: scenario.yaml)
//! - `RUST_LOG`: Log level (default: from scenario, else info)
//!
//! # Exit Codes
//!
//! - `0`: Scored
//! - `1`: Configuration or computation error
//! - `2`: Consistency gate failed, no score produced

use std::process::ExitCode;

use anyhow::Context;
use objective_engine::config::{DEFAULT_CONFIG_PATH, load_config};
use objective_engine::telemetry::init_telemetry;
use objective_engine::{ObjectiveEngine, ScoreOutcome};

/// Exit code for a configuration or computation error.
const EXIT_ERROR: u8 = 1;

/// Exit code for a gate failure.
const EXIT_GATE_FAILURE: u8 = 2;

fn config_path() -> String {
    std::env::args()
        .nth(1)
        .or_else(|| std::env::var("OBJECTIVE_CONFIG").ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
}

fn run() -> anyhow::Result<ScoreOutcome> {
    let path = config_path();
    let config = load_config(Some(path.as_str()))
        .with_context(|| format!("failed to load scenario from {path}"))?;

    // The subscriber depends on the scenario, so loading happens unlogged.
    init_telemetry(&config.observability.logging);
    tracing::debug!(
        path = %path,
        assets = config.portfolio.weights.len(),
        observations = config.observations.len(),
        "Loaded scoring scenario"
    );
    tracing::info!(path = %path, "Scoring scenario");

    let portfolio = config.portfolio()?;
    let engine = ObjectiveEngine::new(config.latency);
    let outcome = engine
        .score(
            &portfolio,
            &config.observations,
            config.gate.tolerance,
            &config.coefficients,
        )
        .context("scoring failed")?;

    let report = serde_json::to_string_pretty(&outcome).context("failed to render outcome")?;
    println!("{report}");

    Ok(outcome)
}

const fn exit_status(outcome: &ScoreOutcome) -> u8 {
    match outcome {
        ScoreOutcome::Scored(_) => 0,
        ScoreOutcome::GateFailure(_) => EXIT_GATE_FAILURE,
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(outcome) => ExitCode::from(exit_status(&outcome)),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
