//! Logger setup for the gitrig binary.
//!
//! The library only emits through the `log` facade (debug level from the
//! session layer); embedding programs install whatever logger they like.

use env_logger::{Builder, Env};

/// Install `env_logger`, honoring `RUST_LOG`.
///
/// Without `RUST_LOG` the filter is `info`, or `debug` when `verbose` is set.
/// Installing twice is harmless.
pub fn init(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let _ = Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_target(false)
        .try_init();
}
