//! Console logging setup.
//!
//! `RUST_LOG` overrides the default filter:
//!
//! ```bash
//! RUST_LOG=imageclass_core=trace imageclass-desktop
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info,imageclass=debug,imageclass_core=debug";

/// Build the filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber (fmt layer + env filter).
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let result = tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init();

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
