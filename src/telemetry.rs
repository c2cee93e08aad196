//! Tracing subscriber setup.

use crate::config::{LogFormat, Settings};

/// Install the global subscriber: an `EnvFilter` from `log_level` and a text or
/// JSON formatter on stderr. Later calls are no-ops.
pub fn init_tracing(settings: &Settings) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let env_filter =
        EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));

    let registry = tracing_subscriber::registry().with(env_filter);

    // stdout carries command output
    let _ = match settings.log_format {
        LogFormat::Json => tracing::subscriber::set_global_default(
            registry.with(fmt::layer().json().with_writer(std::io::stderr)),
        ),
        LogFormat::Text => tracing::subscriber::set_global_default(
            registry.with(fmt::layer().with_writer(std::io::stderr)),
        ),
    };
}
