//! Console logging setup.
//!
//! Filtering follows `RUST_LOG` when set:
//!
//! ```bash
//! RUST_LOG=portfolio_core=debug portfolio-desktop
//! ```

use tracing_subscriber::EnvFilter;

/// Default directive when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "info";

/// Build the filter from `RUST_LOG`, falling back to `default`.
pub fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global fmt subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(DEFAULT_FILTER))
        .with_target(true)
        .try_init();
}
