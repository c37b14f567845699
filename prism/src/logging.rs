//! Logging to stderr through `tracing-subscriber`.

use std::io;

use tracing_subscriber::filter::{EnvFilter, ParseError};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::Layer;

#[derive(Debug, derive_more::From, thiserror::Error)]
pub enum LoggingError {
    #[error("Invalid log filter: {0}")]
    Filter(ParseError),

    #[error("Failed to initialize logging: {0}")]
    Init(TryInitError),
}

/// Install the global subscriber
///
/// `filter` uses the `tracing` directive syntax, e.g. `warn` or
/// `prism=debug,prism_stats=trace`.
pub fn init(filter: &str) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_new(filter)?;

    let stderr = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_level(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(stderr).try_init()?;

    tracing::debug!("initialized logging");

    Ok(())
}
