//! Tracing Setup
//!
//! Initializes the `tracing` subscriber for the objective engine binary.
//!
//! # Configuration
//!
//! - `RUST_LOG`: Filter directives (overrides `observability.logging.level`)
//! - `observability.logging.format`: `json` (default) or `pretty`
//!
//! # Usage
//!
//! ```rust,ignore
//! use objective_engine::telemetry::init_telemetry;
//!
//! let config = load_config(None)?;
//! init_telemetry(&config.observability.logging);
//! ```

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

use crate::config::{LogFormat, LoggingConfig};

/// Build the env filter, preferring `RUST_LOG` over the configured level.
fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Initialize console tracing.
///
/// Logs go to stderr so stdout stays free for the score report. Calling this
/// twice is harmless; the second call leaves the first subscriber in place.
pub fn init_telemetry(config: &LoggingConfig) {
    let span_events = if config.include_spans {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_span_events(span_events)
        .with_writer(std::io::stderr);

    let result = match config.format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    if let Err(e) = result {
        eprintln!("Tracing subscriber already initialized: {e}");
        return;
    }

    tracing::debug!(
        level = %config.level,
        format = config.format.as_str(),
        "Tracing initialized"
    );
}
