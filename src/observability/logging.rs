//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for the binary
//! - Pick the log level from the environment, falling back to config
//! - Pretty output for terminals, JSON lines for machines
//!
//! The configuration is read before the subscriber exists, so the
//! "Configuration loaded" event is emitted by [`log_config_loaded`] once
//! [`init_logging`] has run.

use std::path::Path;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, ObservabilityConfig, RegtreeConfig};

/// Filter used when `RUST_LOG` is unset.
pub fn default_filter(config: &ObservabilityConfig) -> String {
    format!("regtree={}", config.log_level.to_ascii_lowercase())
}

/// Install the global subscriber. Fails if one is already set.
pub fn init_logging(
    config: &ObservabilityConfig,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(config)));

    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    }
}

/// Summarize a loaded route table file.
pub fn log_config_loaded(path: &Path, config: &RegtreeConfig) {
    tracing::info!(
        path = %path.display(),
        routes = config.routes.len(),
        groups = config.groups.len(),
        auto_head = config.router.auto_head,
        auto_trailing_slash = config.router.auto_trailing_slash,
        "Configuration loaded"
    );
}
