//! Log subscriber for the binary.
//!
//! Events go to stderr so stdout carries only the JSON result. `RUST_LOG`
//! overrides the level chosen by `--verbose`.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::error::CliError;

/// Install the global subscriber.
pub fn init(is_verbose: bool) -> Result<(), CliError> {
    let default_level = if is_verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()?;
    Ok(())
}
