//! Diagnostic logging setup.
//!
//! Structured logging via the `tracing` crate. Diagnostics always go to
//! stderr: stdout carries the manifest body (or the verification verdict)
//! and must never interleave with log lines. The `MANGEN_LOG` environment
//! variable takes precedence over the CLI-selected level.

use crate::error::ManifestError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Initialize the logging system with the given default level.
///
/// Accepts the usual `tracing` level names (`trace`, `debug`, `info`,
/// `warn`, `error`, `off`).
pub fn init_logging(level: &str) -> Result<(), ManifestError> {
    let filter = EnvFilter::try_from_env("MANGEN_LOG")
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| ManifestError::Logging(format!("invalid log level {:?}: {}", level, e)))?;

    Registry::default()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| ManifestError::Logging(e.to_string()))
}
