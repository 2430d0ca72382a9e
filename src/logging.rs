//! Tracing subscriber setup
//!
//! Logging is never configured as a side effect of using the library. The
//! consuming binary calls [`init_logging`] once during startup; every module
//! then emits structured events through `tracing`.

use crate::error::{Error, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber at the given level.
///
/// Unknown level strings fall back to `info`. Calling this twice returns
/// `Error::Logging` rather than panicking, so tests and embedding
/// applications can tolerate an already-installed subscriber.
pub fn init_logging(level: &str) -> Result<()> {
    let level = match level.to_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    };

    let env_filter =
        tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| Error::Logging(format!("Failed to install subscriber: {e}")))?;

    tracing::info!("Logging initialized with level: {}", level);
    Ok(())
}
