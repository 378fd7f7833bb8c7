//! Tracing/logging bootstrap.

use anyhow::anyhow;
use tracing_subscriber::EnvFilter;

use folio_kernel::settings::{LogFormat, TelemetrySettings};

/// Initialize the global tracing subscriber according to settings.
///
/// `RUST_LOG` overrides the default `info` filter.
pub fn init(settings: &TelemetrySettings) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let result = match settings.log_format {
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .try_init(),
    };
    result.map_err(|e| anyhow!("failed to initialize tracing subscriber: {e}"))?;

    tracing::info!(format = ?settings.log_format, "telemetry initialized");
    Ok(())
}
