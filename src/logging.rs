//! Structured logging setup
//!
//! Logs go to stderr so the `points` subcommand can keep stdout for its
//! output. `RUST_LOG` overrides the default `info` filter.

use clap::ValueEnum;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable output (development)
    #[default]
    Pretty,
    /// JSON structured logging (production)
    Json,
}

/// Install the global tracing subscriber
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(format: LogFormat) -> Result<(), String> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hyper=info,tower=info"));

    let registry = tracing_subscriber::registry();

    let result = match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_current_span(true)
                    .with_filter(env_filter),
            )
            .try_init(),
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_filter(env_filter),
            )
            .try_init(),
    };

    result.map_err(|e| format!("Failed to initialize logging: {}", e))?;
    tracing::debug!(?format, "logging initialized");
    Ok(())
}
