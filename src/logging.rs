//! Structured logging initialization
//!
//! The library itself only emits `tracing` events; installing a subscriber
//! is the caller's choice. This helper wires up a compact stderr
//! subscriber for binaries and tests that want one.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize structured logging to stderr
///
/// The `FRONTIER_LOG` environment variable (or the standard `RUST_LOG`)
/// overrides `level`. Returns an error if a global subscriber is already
/// installed.
pub fn init_tracing(level: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let default_level = level.unwrap_or("warn");
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("FRONTIER_LOG"))
        .unwrap_or_else(|_| {
            EnvFilter::new(if default_level.contains('=') {
                default_level.to_string()
            } else {
                format!("frontier_search={}", default_level)
            })
        });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}
