//! Tracing configuration for the harness.
//!
//! Logs go to stderr so that command output on stdout stays machine readable.

use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Initialize the global tracing subscriber.
#[allow(clippy::missing_errors_doc)]
pub fn init_subscriber(level: Level) -> Result<()> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true);

    Registry::default()
        .with(EnvFilter::new(level.as_str().to_lowercase()))
        .with(fmt_layer)
        .try_init()
        .context("Failed to set global default subscriber")
}
