//! Tracing setup for binaries and tests that embed the bank.

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber filtered by `RUST_LOG`, or by `default_filter`
/// when `RUST_LOG` is unset or unparsable.
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place and return `false`.
pub fn init_tracing(default_filter: &str) -> bool {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init()
        .is_ok()
}
