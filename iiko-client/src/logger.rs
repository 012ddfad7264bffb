//! Logging setup for applications embedding the client
//!
//! The library itself only emits `tracing` events; installing a subscriber
//! is left to the application. These helpers cover the common cases.

use crate::{ClientError, ClientResult};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize human readable console logging
///
/// `RUST_LOG` takes precedence over `level` when set.
pub fn init_logger(level: &str) -> ClientResult<()> {
    init_logger_with_format(level, false)
}

/// Initialize console logging, optionally as JSON lines
///
/// # Examples
/// ```no_run
/// // Development
/// iiko_client::logger::init_logger_with_format("debug", false)?;
///
/// // Log shipping
/// iiko_client::logger::init_logger_with_format("info", true)?;
/// # Ok::<(), iiko_client::ClientError>(())
/// ```
pub fn init_logger_with_format(level: &str, json_format: bool) -> ClientResult<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let registry = tracing_subscriber::registry().with(env_filter);

    let result = if json_format {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true)
                    .with_thread_ids(true),
            )
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(false).with_thread_ids(false))
            .try_init()
    };

    result.map_err(|err| ClientError::Config(format!("failed to initialize logger: {err}")))
}
