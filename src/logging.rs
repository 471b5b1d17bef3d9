//! Logging setup for the command line tool.
//!
//! Diagnostics go to stderr so that stdout carries nothing but the accuracy line.

use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

/// Errors that may occur while initializing logging.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The filter directive could not be parsed.
    #[error("Invalid log filter `{filter}`: {source}")]
    Filter {
        filter: String,
        source: tracing_subscriber::filter::ParseError,
    },
    /// Failed to set the global tracing subscriber.
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Install a global subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence over `default_filter` when set.
pub fn init(default_filter: &str) -> Result<(), LoggingError> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(env.as_deref(), default_filter)?;

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let subscriber = Registry::default().with(filter).with(stderr_layer);
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// A valid `env` directive wins, otherwise `default_filter` is used.
fn build_filter(env: Option<&str>, default_filter: &str) -> Result<EnvFilter, LoggingError> {
    if let Some(filter) = env.and_then(|env| EnvFilter::try_new(env).ok()) {
        return Ok(filter);
    }

    EnvFilter::try_new(default_filter).map_err(|source| LoggingError::Filter {
        filter: default_filter.to_string(),
        source,
    })
}
