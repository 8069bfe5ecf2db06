//! Tracing setup for the CLI.

use tracing_subscriber::{fmt, EnvFilter};

/// Build the log filter: `RUST_LOG` when set, otherwise `log_level`.
///
/// `log_level` accepts full directives such as `info,tile_common=debug`.
pub fn log_filter(log_level: &str) -> anyhow::Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(log_level)?),
    }
}

/// Install the global subscriber. Logs go to stderr so plans on stdout stay
/// machine-readable.
pub fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    fmt()
        .with_env_filter(log_filter(log_level)?)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
