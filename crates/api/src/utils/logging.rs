use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use upsbridge_domain::UpsBridgeError;

/// Output format for log lines written to stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins over the default directive unless `verbose` is set.
///
/// # Errors
/// Fails if a global subscriber is already installed.
pub fn init_logging(format: LogFormat, verbose: bool) -> anyhow::Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => {
            registry.with(fmt::layer().json().with_writer(std::io::stderr)).try_init()?;
        }
        LogFormat::Text => {
            registry.with(fmt::layer().with_writer(std::io::stderr)).try_init()?;
        }
    }

    Ok(())
}

/// Log the outcome of a command execution with structured fields.
///
/// `command` should be a stable identifier such as `"shipment::submit"`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, error: Option<&UpsBridgeError>) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    match error {
        None => info!(command, duration_ms, "command_execution_success"),
        Some(err) => warn!(
            command,
            duration_ms,
            error_kind = error_label(err),
            error = %err,
            "command_execution_failure"
        ),
    }
}

/// Convert an `UpsBridgeError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &UpsBridgeError) -> &'static str {
    error.label()
}
