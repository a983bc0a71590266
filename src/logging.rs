// SPDX-License-Identifier: MPL-2.0
//! Tracing setup for the demo binary.
//!
//! `RUST_LOG` takes precedence; otherwise `info`, or `debug` with `--verbose`.
//! Library code only emits events and never installs a subscriber.

use tracing_subscriber::EnvFilter;

/// Installs a compact `fmt` subscriber.
///
/// Returns `false` when a global subscriber was already set (e.g. by a test
/// harness); the existing one is left in place.
pub fn init_tracing(verbose: bool) -> bool {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .compact()
        .try_init()
        .is_ok()
}
